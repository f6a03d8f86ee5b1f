use log::debug;

use crate::error::GenError;
use crate::generators::models::MAX_BATCH;
use crate::generators::{GenerateRequest, GeneratedValue, ValueGenerator};
use crate::sampler::Sampler;
use crate::tables::Tables;

#[cfg_attr(test, mockall::automock)]
pub trait Commander: Send {
    fn generate(&mut self, request: &GenerateRequest) -> Result<Vec<GeneratedValue>, GenError>;
    fn tables(&self) -> Tables;
}

/// Draws `count` values from one generator, failing on the first error.
pub fn generate_batch(
    generator: &dyn ValueGenerator,
    sampler: &mut Sampler,
    tables: &Tables,
    count: usize,
) -> Result<Vec<GeneratedValue>, GenError> {
    if count == 0 || count > MAX_BATCH {
        return Err(GenError::invalid(format!(
            "count must be between 1 and {MAX_BATCH}, got {count}"
        )));
    }
    (0..count)
        .map(|_| generator.generate(sampler, tables))
        .collect()
}

pub struct ConcreteCommander {
    sampler: Sampler,
    tables: Tables,
}

impl ConcreteCommander {
    pub fn new(sampler: Sampler, tables: Tables) -> Self {
        Self { sampler, tables }
    }
}

impl Commander for ConcreteCommander {
    fn generate(&mut self, request: &GenerateRequest) -> Result<Vec<GeneratedValue>, GenError> {
        debug!("Generating {} value(s) for {:?}", request.count, request.generator);
        generate_batch(
            &request.generator,
            &mut self.sampler,
            &self.tables,
            request.count,
        )
    }

    fn tables(&self) -> Tables {
        self.tables.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::models::MAX_LENGTH;
    use crate::generators::{GeneratorType, MockValueGenerator};
    use quickcheck_macros::quickcheck;

    fn create_commander() -> ConcreteCommander {
        ConcreteCommander::new(Sampler::from_seed(7), Tables::default())
    }

    mod mock_tests {
        use super::*;

        #[test]
        fn batch_calls_generator_per_value() {
            let mut generator = MockValueGenerator::new();
            generator
                .expect_generate()
                .times(3)
                .returning(|_, _| Ok(GeneratedValue::Flag(true)));

            let mut sampler = Sampler::from_seed(0);
            let values = generate_batch(&generator, &mut sampler, &Tables::default(), 3).unwrap();
            assert_eq!(values, vec![GeneratedValue::Flag(true); 3]);
        }

        #[test]
        fn batch_stops_at_first_error() {
            let mut generator = MockValueGenerator::new();
            generator
                .expect_generate()
                .times(1)
                .returning(|_, _| Err(GenError::invalid("boom")));

            let mut sampler = Sampler::from_seed(0);
            let result = generate_batch(&generator, &mut sampler, &Tables::default(), 5);
            assert_eq!(result, Err(GenError::invalid("boom")));
        }

        #[test]
        fn batch_rejects_bad_counts() {
            let mut generator = MockValueGenerator::new();
            generator.expect_generate().times(0);

            let mut sampler = Sampler::from_seed(0);
            let tables = Tables::default();
            assert!(generate_batch(&generator, &mut sampler, &tables, 0).is_err());
            assert!(generate_batch(&generator, &mut sampler, &tables, MAX_BATCH + 1).is_err());
        }
    }

    #[test]
    fn generate_rejects_oversized_values() {
        let mut commander = create_commander();
        let request = GenerateRequest::single(GeneratorType::Utf8 {
            length: MAX_LENGTH + 1,
        });
        assert!(matches!(
            commander.generate(&request),
            Err(GenError::InvalidArgument(_))
        ));

        let request = GenerateRequest::single(GeneratorType::Ipsum {
            words: usize::MAX / 2 + 1,
            paragraphs: 2,
        });
        assert!(matches!(
            commander.generate(&request),
            Err(GenError::InvalidArgument(_))
        ));
    }

    #[quickcheck]
    fn generate_returns_requested_count(count: u8) -> bool {
        let count = (count as usize % 20) + 1;
        let mut commander = create_commander();
        let request = GenerateRequest {
            generator: GeneratorType::Uuid { valid: true },
            count,
        };
        commander
            .generate(&request)
            .map(|values| values.len() == count)
            .unwrap_or(false)
    }

    #[test]
    fn generate_reports_domain_errors() {
        let mut commander = create_commander();
        let request = GenerateRequest::single(GeneratorType::Ipaddr {
            three_octet: false,
            ipv6: false,
            prefix: crate::generators::IpPrefix::Fields(vec![1, 2, 3, 4]),
        });
        assert!(matches!(
            commander.generate(&request),
            Err(GenError::DomainConstraintViolation(_))
        ));
    }

    #[test]
    fn tables_returns_configured_set() {
        let tables = Tables {
            tlds: vec!["zz".to_string()],
            ..Tables::default()
        };
        let mut commander = ConcreteCommander::new(Sampler::from_seed(1), tables.clone());
        assert_eq!(commander.tables(), tables);

        let request = GenerateRequest::single(GeneratorType::Url { extended: false });
        let values = commander.generate(&request).unwrap();
        assert!(matches!(&values[0], GeneratedValue::Text(url) if url.ends_with(".zz")));
    }
}
