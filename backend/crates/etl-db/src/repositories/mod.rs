pub mod user_record_repository;
