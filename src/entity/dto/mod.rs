pub mod limit_signal_dto;
