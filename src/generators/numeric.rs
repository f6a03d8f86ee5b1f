use crate::error::GenError;
use crate::sampler::Sampler;

pub fn gen_bool(sampler: &mut Sampler) -> Result<bool, GenError> {
    sampler.choice(&[true, false]).copied()
}

pub fn gen_integer(sampler: &mut Sampler, min: i64, max: i64) -> Result<i64, GenError> {
    sampler.in_range(min, max)
}

pub fn gen_positive_integer(sampler: &mut Sampler) -> Result<i64, GenError> {
    sampler.in_range(1, i64::MAX)
}

pub fn gen_negative_integer(sampler: &mut Sampler) -> Result<i64, GenError> {
    sampler.in_range(i64::MIN, -1)
}
