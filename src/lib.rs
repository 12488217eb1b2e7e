pub mod service {
    pub mod age;
    pub mod config_service;
    pub mod dispatch;
    pub mod remote;
    pub mod report;
    #[cfg(feature = "s3")]
    pub mod s3;
    pub mod scan;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod retention_facade;
    pub mod traits {
        pub mod i_retention;
    }
}

pub mod models {
    pub mod remote;
    pub mod scan;
    pub mod summary;
}

pub mod utils {
    pub mod duration;
    pub mod format;
    pub mod glob;
    pub mod utils;
}
