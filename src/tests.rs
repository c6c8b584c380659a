#[cfg(test)]
mod tests {
    use crate::builders::car::CarBuilder;
    use crate::core::config::CarSpec;
    use crate::core::engine::{DieselEngine, EngineKind, SportEngine};
    use crate::core::error::BuildError;
    use crate::utils::{self, BuildOptions};
    use std::fs;
    use tempfile::tempdir;

    fn capture<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_prints_both_cars_in_order() {
        let output = capture(|out| utils::run_demo(out));

        assert_eq!(
            output,
            "Car{seats=2, engine=Sport Engine, hasGPS=true, hasTripComputer=true}\n\
             Car{seats=5, engine=Diesel Engine, hasGPS=false, hasTripComputer=false}\n"
        );
    }

    #[test]
    fn test_build_from_flags() {
        let options = BuildOptions {
            seats: Some(4),
            engine: Some(EngineKind::Diesel),
            gps: true,
            ..Default::default()
        };
        let output = capture(|out| utils::run_build(&options, out));

        assert_eq!(
            output,
            "Car{seats=4, engine=Diesel Engine, hasGPS=true, hasTripComputer=false}\n"
        );
    }

    #[test]
    fn test_build_without_engine_fails_with_reason() {
        let options = BuildOptions {
            seats: Some(4),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = utils::run_build(&options, &mut out).unwrap_err();

        assert!(err.to_string().contains("Engine must be set!"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_flags_override_description_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("car.toml");
        fs::write(&path, "seats = 0\nengine = \"sport\"\ngps = true\n").unwrap();

        let options = BuildOptions {
            config: Some(path.as_path()),
            seats: Some(3),
            engine: Some(EngineKind::Diesel),
            ..Default::default()
        };
        let output = capture(|out| utils::run_build(&options, out));

        assert_eq!(
            output,
            "Car{seats=3, engine=Diesel Engine, hasGPS=true, hasTripComputer=false}\n"
        );
    }

    #[test]
    fn test_description_file_with_bad_seats_fails_at_build() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("car.toml");
        fs::write(&path, "seats = -2\nengine = \"diesel\"\n").unwrap();

        let spec = CarSpec::load(&path).unwrap();
        let err = spec.build().unwrap_err();

        assert_eq!(
            err.downcast_ref::<BuildError>(),
            Some(&BuildError::InvalidSeats { seats: -2 })
        );
    }

    #[test]
    fn test_missing_description_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = CarSpec::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn test_builder_reuse_after_failure_and_success() {
        let mut builder = CarBuilder::new();
        builder.engine(SportEngine);
        assert_eq!(builder.build().unwrap_err(), BuildError::InvalidSeats { seats: 0 });

        builder.seats(2);
        let first = builder.build().unwrap();

        builder.seats(7).engine(DieselEngine).gps(true);
        let second = builder.build().unwrap();

        assert_eq!(
            first.to_string(),
            "Car{seats=2, engine=Sport Engine, hasGPS=false, hasTripComputer=false}"
        );
        assert_eq!(
            second.to_string(),
            "Car{seats=7, engine=Diesel Engine, hasGPS=true, hasTripComputer=false}"
        );
    }
}
