pub mod accounting_config;
