pub mod p910_kot_report;
