use crate::record::{RequestEvent, parse_line};

pub const E3SM_PATH: &str = "/thredds/fileServer/user_pub_work/E3SM/1_0/historical/1deg_atm_60-30km_ocean/atmos/180x360/model-output/mon/ens1/v1/file.nc";

pub const CMIP6_PATH: &str = "/thredds/fileServer/user_pub_work/CMIP6/CMIP/E3SM-Project/E3SM-1-0/historical/r1i1p1f1/Amon/tas/gr/v20190913/tas_Amon_E3SM-1-0_historical_r1i1p1f1_gr_185001-187412.nc";

/// Builds an access-log line in the archive's layout. `date` is `dd/Mon/yyyy`.
pub fn log_line(date: &str, path: &str, status: &str, bytes: &str) -> String {
    format!(
        "128.55.1.1 - - [{date}:03:18:49 -0700] \"GET {path} HTTP/1.1\" {status} {bytes} \"-\" \"Wget/1.14 (linux-gnu)\""
    )
}

pub fn event(date: &str, path: &str, status: &str, bytes: &str) -> RequestEvent {
    parse_line(&log_line(date, path, status, bytes)).unwrap()
}
