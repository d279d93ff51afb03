//! Service Time Domain - Recording and aggregating periods of service
//!
//! This crate provides:
//! - Service periods tagged with the regime they were served under
//! - Concomitance detection between overlapping periods of one person
//! - Conversion of hazardous service into common time
//! - Aggregation of adjusted durations under category filters
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use core_kernel::{PersonId, ServiceDuration};
//! use domain_service_time::{ServiceCategory, ServiceFilter, ServicePeriod, ServiceRecord};
//!
//! let owner = PersonId::new();
//! let mut record = ServiceRecord::new(owner);
//! let period = ServicePeriod::new(
//!     owner,
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
//!     "City Hall",
//!     ServiceCategory::MunicipalPublic,
//! )
//! .unwrap();
//! record.add_period(period).unwrap();
//!
//! assert_eq!(record.total(&ServiceFilter::PublicService), ServiceDuration::new(1, 0, 1));
//! ```

pub mod period;
pub mod overlap;
pub mod conversion;
pub mod aggregation;
pub mod record;
pub mod error;

pub use period::{ServiceCategory, ServicePeriod};
pub use overlap::{find_overlap, is_concomitant};
pub use conversion::{ConversionFactors, ConversionPolicy};
pub use aggregation::{role_time, total, total_by, total_up_to, totals_by_category, ServiceFilter};
pub use record::ServiceRecord;
pub use error::ServiceError;
