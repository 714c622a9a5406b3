//! Tests for constrained drawing generation: ranges, uniqueness and the retry budget

#[cfg(test)]
mod tests {
    use drawsmith::DrawError;
    use drawsmith::algorithm::generator::{DrawingGenerator, GeneratorConfig};
    use drawsmith::analysis::frequency::{FrequencyTable, FrequencyTables};
    use drawsmith::model::{NumberCategory, ValidRange};
    use rand::RngCore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::{Duration, Instant};

    /// Random source that fails the test if it is ever consulted
    struct UntouchedRng;

    impl RngCore for UntouchedRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("random source consulted")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("random source consulted")
        }

        fn fill_bytes(&mut self, _dst: &mut [u8]) {
            unreachable!("random source consulted")
        }
    }

    fn table(pairs: &[(u32, u32)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(value, count) in pairs {
            for _ in 0..count {
                table.tally(value);
            }
        }
        table
    }

    fn tables(main: &[(u32, u32)], special: &[(u32, u32)]) -> FrequencyTables {
        FrequencyTables {
            main: table(main),
            special: table(special),
            drawings: 1,
        }
    }

    fn uniform_main() -> Vec<(u32, u32)> {
        (1..=69).map(|v| (v, 1)).collect()
    }

    // Tests default configuration matches the Powerball layout
    // Verified by swapping the default ranges
    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.main_range, ValidRange::new(1, 69).unwrap());
        assert_eq!(config.special_range, ValidRange::new(1, 26).unwrap());
        assert_eq!(config.max_attempts, 1000);
        assert_eq!(*DrawingGenerator::default().config(), config);
    }

    // Tests generated drawings respect every structural constraint
    // Verified by skipping the uniqueness check
    #[test]
    fn test_drawings_are_distinct_sorted_and_in_range() {
        let tables = tables(&uniform_main(), &[(1, 3), (13, 2), (26, 1)]);
        let generator = DrawingGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);

        let drawings = generator.generate(&tables, 500, &mut rng).unwrap();

        assert_eq!(drawings.len(), 500);
        for drawing in &drawings {
            let main = drawing.main();
            assert!(main.windows(2).all(|w| w[0] < w[1]));
            assert!(main.iter().all(|&n| (1..=69).contains(&n)));
            assert!([1, 13, 26].contains(&drawing.special()));
        }
    }

    // Tests exactly five observed values always produce the same main numbers
    // Verified by sampling without the uniqueness filter
    #[test]
    fn test_exactly_five_main_values() {
        let tables = tables(&[(8, 1), (16, 4), (24, 2), (32, 1), (64, 9)], &[(3, 1)]);
        let generator = DrawingGenerator::default();
        let mut rng = StdRng::seed_from_u64(9);

        for drawing in generator.generate(&tables, 25, &mut rng).unwrap() {
            assert_eq!(drawing.main(), &[8, 16, 24, 32, 64]);
            assert_eq!(drawing.special(), 3);
        }
    }

    // Tests too few distinct main values fail before any sampling
    // Verified by removing the pre-check
    #[test]
    fn test_degenerate_main_pool_is_detected_up_front() {
        let tables = tables(&[(3, 10), (7, 2)], &[(1, 1)]);
        let generator = DrawingGenerator::default();

        let err = generator.generate(&tables, 1, &mut UntouchedRng).unwrap_err();

        match err {
            DrawError::DegenerateFrequencyPool {
                category,
                distinct_in_range,
                required,
                attempts,
            } => {
                assert_eq!(category, NumberCategory::Main);
                assert_eq!(distinct_in_range, 2);
                assert_eq!(required, 5);
                assert_eq!(attempts, 0);
            }
            other => panic!("expected DegenerateFrequencyPool, got {other}"),
        }
    }

    // Tests out-of-range observations do not count toward feasibility
    // Verified by counting all distinct values
    #[test]
    fn test_out_of_range_values_do_not_count() {
        let tables = tables(&[(1, 1), (2, 1), (3, 1), (4, 1), (70, 5), (99, 5)], &[(1, 1)]);

        let err = DrawingGenerator::default()
            .prepare(&tables)
            .unwrap_err();

        assert!(matches!(
            err,
            DrawError::DegenerateFrequencyPool {
                category: NumberCategory::Main,
                distinct_in_range: 4,
                ..
            }
        ));
    }

    // Tests a special pool with nothing in range fails
    // Verified by accepting any special value
    #[test]
    fn test_degenerate_special_pool() {
        let tables = tables(&uniform_main(), &[(27, 4), (40, 1)]);

        let err = DrawingGenerator::default()
            .generate(&tables, 1, &mut StdRng::seed_from_u64(0))
            .unwrap_err();

        assert!(matches!(
            err,
            DrawError::DegenerateFrequencyPool {
                category: NumberCategory::Special,
                distinct_in_range: 0,
                required: 1,
                attempts: 0,
            }
        ));
    }

    // Tests out-of-range special values are redrawn rather than emitted
    // Verified by emitting the first sampled special value
    #[test]
    fn test_out_of_range_special_is_redrawn() {
        let tables = tables(&uniform_main(), &[(30, 5), (4, 5)]);
        let mut rng = StdRng::seed_from_u64(17);

        let drawings = DrawingGenerator::default()
            .generate(&tables, 200, &mut rng)
            .unwrap();

        assert!(drawings.iter().all(|d| d.special() == 4));
    }

    // Tests a feasible but heavily skewed pool gives up after the budget
    // Verified by looping without a bound
    #[test]
    fn test_retry_budget_is_enforced() {
        let mut main: Vec<(u32, u32)> = (1..=5).map(|v| (v, 1)).collect();
        main.push((60, 1_000_000));
        let tables = tables(&main, &[(1, 1)]);
        let generator = DrawingGenerator::new(GeneratorConfig {
            max_attempts: 10,
            ..GeneratorConfig::default()
        });

        let err = generator
            .generate(&tables, 1, &mut StdRng::seed_from_u64(1))
            .unwrap_err();

        match err {
            DrawError::DegenerateFrequencyPool {
                category,
                distinct_in_range,
                attempts,
                ..
            } => {
                assert_eq!(category, NumberCategory::Main);
                assert_eq!(distinct_in_range, 6);
                assert_eq!(attempts, 10);
            }
            other => panic!("expected DegenerateFrequencyPool, got {other}"),
        }
    }

    // Tests empty tables are reported distinctly from degenerate ones
    // Verified by folding empty tables into the degenerate check
    #[test]
    fn test_empty_tables_are_reported() {
        let generator = DrawingGenerator::default();

        let err = generator
            .generate(&FrequencyTables::default(), 1, &mut UntouchedRng)
            .unwrap_err();
        assert!(matches!(
            err,
            DrawError::EmptyFrequencyTable {
                category: NumberCategory::Main
            }
        ));

        let special_only_empty = tables(&uniform_main(), &[]);
        let err = generator
            .generate(&special_only_empty, 1, &mut UntouchedRng)
            .unwrap_err();
        assert!(matches!(
            err,
            DrawError::EmptyFrequencyTable {
                category: NumberCategory::Special
            }
        ));
    }

    // Tests zero drawings return immediately without consuming randomness
    // Verified by validating tables before the count check
    #[test]
    fn test_zero_count_is_a_no_op() {
        let generator = DrawingGenerator::default();

        let drawings = generator
            .generate(&FrequencyTables::default(), 0, &mut UntouchedRng)
            .unwrap();

        assert!(drawings.is_empty());
    }

    // Tests a zero retry budget is rejected as a parameter error
    // Verified by allowing a zero budget
    #[test]
    fn test_zero_max_attempts_is_invalid() {
        let tables = tables(&uniform_main(), &[(1, 1)]);
        let generator = DrawingGenerator::new(GeneratorConfig {
            max_attempts: 0,
            ..GeneratorConfig::default()
        });

        let err = generator.prepare(&tables).unwrap_err();

        assert!(matches!(
            err,
            DrawError::InvalidParameter {
                parameter: "max_attempts",
                ..
            }
        ));
    }

    // Tests custom ranges restrict the output
    // Verified by ignoring the configured main range
    #[test]
    fn test_custom_ranges() {
        let main: Vec<(u32, u32)> = (1..=25).map(|v| (v, 1)).collect();
        let tables = tables(&main, &[(1, 1), (2, 1), (3, 1)]);
        let generator = DrawingGenerator::new(GeneratorConfig {
            main_range: ValidRange::new(10, 20).unwrap(),
            special_range: ValidRange::new(2, 2).unwrap(),
            max_attempts: 10_000,
        });
        let mut rng = StdRng::seed_from_u64(8);

        for drawing in generator.generate(&tables, 50, &mut rng).unwrap() {
            assert!(drawing.main().iter().all(|&n| (10..=20).contains(&n)));
            assert_eq!(drawing.special(), 2);
        }
    }

    // Tests a range spanning every u32 costs no more than the observed pool
    // Verified by sizing the uniqueness set over the range width
    #[test]
    fn test_full_width_main_range() {
        let generator = DrawingGenerator::new(GeneratorConfig {
            main_range: ValidRange::new(1, u32::MAX).unwrap(),
            special_range: ValidRange::new(1, u32::MAX).unwrap(),
            ..GeneratorConfig::default()
        });
        let tables = tables(
            &[
                (7, 3),
                (12, 1),
                (70_000, 2),
                (1_000_000, 1),
                (3_000_000_000, 4),
                (u32::MAX, 1),
            ],
            &[(4_000_000_000, 1)],
        );
        let started = Instant::now();

        let drawings = generator
            .generate(&tables, 200, &mut StdRng::seed_from_u64(21))
            .unwrap();

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(drawings.len(), 200);
        for drawing in drawings {
            assert!(drawing.main().windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(drawing.special(), 4_000_000_000);
        }
    }

    // Tests the progress callback sees every slot in order
    // Verified by reporting only the final slot
    #[test]
    fn test_generate_with_reports_each_slot() {
        let tables = tables(&uniform_main(), &[(1, 1)]);
        let mut slots = Vec::new();

        let drawings = DrawingGenerator::default()
            .generate_with(&tables, 6, &mut StdRng::seed_from_u64(2), |slot| {
                slots.push(slot);
            })
            .unwrap();

        assert_eq!(drawings.len(), 6);
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    // Tests prepared pools can be drawn from directly
    #[test]
    fn test_prepared_pools_draw() {
        let tables = tables(&[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)], &[(6, 1)]);
        let pools = DrawingGenerator::default().prepare(&tables).unwrap();

        let drawing = pools.draw(&mut StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(drawing.numbers(), [1, 2, 3, 4, 5, 6]);
    }
}
