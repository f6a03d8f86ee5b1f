use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GenError;
use crate::generators::numeric::gen_bool;
use crate::sampler::Sampler;

/// Calendar fields sampled independently of one another. Nothing ties `day`
/// to `month` or `weekday` to the date, so February 31st is a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeRecord {
    pub year: i64,
    /// 1-12
    pub month: i64,
    /// 1-31
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    /// 0 is Monday.
    pub weekday: i64,
    /// 1-366
    pub yearday: i64,
    pub is_dst: bool,
}

pub fn gen_time(sampler: &mut Sampler) -> Result<TimeRecord, GenError> {
    Ok(TimeRecord {
        second: sampler.in_range(0, 59)?,
        minute: sampler.in_range(0, 59)?,
        hour: sampler.in_range(0, 23)?,
        day: sampler.in_range(1, 31)?,
        year: sampler.in_range(1900, 2100)?,
        month: sampler.in_range(1, 12)?,
        weekday: sampler.in_range(0, 6)?,
        yearday: sampler.in_range(1, 366)?,
        is_dst: gen_bool(sampler)?,
    })
}
