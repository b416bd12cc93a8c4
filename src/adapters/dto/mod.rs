pub mod file_dto;
pub mod file_record_dto;
