// src/models.rs
pub mod cat_record;
pub mod gammopathy;
pub mod lab_data;
pub mod parameter;
pub mod rivalta;

pub use cat_record::CatRecord;
pub use gammopathy::Gammopathy;
pub use lab_data::LabData;
pub use parameter::Parameter;
pub use rivalta::RivaltaStatus;
