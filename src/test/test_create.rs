
mod test {
    use crate::console_interface::render_board_to_string;
    use crate::core::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn when_chance_is_zero_every_cell_is_unlit() {
        let config = GridConfig::new(3, 4, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let grid = create(&config, &mut rng);

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert!(grid.is_solved());
        assert_eq!(render_board_to_string(&grid), "....\n....\n....\n");
    }

    #[test]
    fn when_chance_is_one_every_cell_is_lit() {
        let config = GridConfig::new(3, 4, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let grid = create(&config, &mut rng);

        assert_eq!(grid.lit_count(), 12);
        assert!(!grid.is_solved());
        assert_eq!(render_board_to_string(&grid), "OOOO\nOOOO\nOOOO\n");
    }

    #[test]
    fn when_seeded_identically_create_is_deterministic() {
        let config = GridConfig::new(5, 5, 0.5).unwrap();

        let mut rng = StdRng::seed_from_u64(1234);
        let first = create(&config, &mut rng);
        let mut rng = StdRng::seed_from_u64(1234);
        let second = create(&config, &mut rng);

        assert_eq!(first, second);
    }

    #[test]
    fn when_config_is_invalid_creation_is_rejected() {
        assert!(GridConfig::new(0, 3, 0.5).is_err());
        assert!(GridConfig::new(3, 0, 0.5).is_err());
        assert!(GridConfig::new(3, 3, -0.1).is_err());
        assert!(GridConfig::new(3, 3, 1.1).is_err());
        assert!(GridConfig::new(3, 3, f64::NAN).is_err());
    }

    #[test]
    fn when_config_is_on_bounds_creation_is_accepted() {
        assert!(GridConfig::new(1, 1, 0.0).is_ok());
        assert!(GridConfig::new(1, 1, 1.0).is_ok());
    }
}
