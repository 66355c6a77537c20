/*
 * End-to-end tests for an offline allocation run
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_run_offline
 *  - test_run_offline_zero_target_writes_nothing
 *  - test_run_offline_bad_records_writes_nothing
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod control_tests {
    use crate::control::{run_offline, RunPaths};
    use crate::shared::Error;
    use std::fs;
    use std::path::Path;

    const BUILDING_JSON: &str = r#"{
        "_minFloor": -2, "_maxFloor": 10,
        "_elevators": [
            { "_id": 0, "_speed": 1.0, "_minFloor": -2, "_maxFloor": 10,
              "_closeTime": 2.0, "_openTime": 2.0, "_startTime": 3.0, "_stopTime": 3.0 },
            { "_id": 1, "_speed": 1.0, "_minFloor": -2, "_maxFloor": 10,
              "_closeTime": 2.0, "_openTime": 2.0, "_startTime": 3.0, "_stopTime": 3.0 },
            { "_id": 2, "_speed": 2.0, "_minFloor": -2, "_maxFloor": 10,
              "_closeTime": 2.0, "_openTime": 2.0, "_startTime": 3.0, "_stopTime": 3.0 }
        ]
    }"#;

    fn setup_run(dir: &Path, building: &str, calls: &str) -> RunPaths {
        let paths = RunPaths {
            building: dir.join("B.json"),
            calls_in: dir.join("Calls_in.csv"),
            calls_out: dir.join("Calls_out.csv"),
        };
        fs::write(&paths.building, building).unwrap();
        fs::write(&paths.calls_in, calls).unwrap();
        paths
    }

    fn call_lines(n: usize) -> String {
        (0..n)
            .map(|i| format!("Elevator call,{}.5,{},{},3,-1\n", i, i % 5, 10 - i))
            .collect()
    }

    #[test]
    fn test_run_offline() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let paths = setup_run(dir.path(), BUILDING_JSON, &call_lines(8));

        // Act
        let report = run_offline(&paths).unwrap();

        // Assert
        assert_eq!(report.fallback_elevator, 2);
        let output = fs::read_to_string(&paths.calls_out).unwrap();
        let allocations: Vec<&str> = output
            .lines()
            .map(|line| line.rsplit(',').next().unwrap())
            .collect();
        assert_eq!(allocations, vec!["0", "1", "2", "2", "0", "1", "2", "2"]);
        assert!(output.starts_with("Elevator call,0.5,0,10,0,0\r\n"));
    }

    #[test]
    fn test_run_offline_zero_target_writes_nothing() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let paths = setup_run(dir.path(), BUILDING_JSON, &call_lines(3));

        // Act
        let result = run_offline(&paths);

        // Assert
        assert!(matches!(result, Err(Error::ZeroTargetCount { elevator: 0, .. })));
        assert!(!paths.calls_out.exists());
    }

    #[test]
    fn test_run_offline_bad_records_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = setup_run(dir.path(), BUILDING_JSON, "Elevator call,1.0,2\n");

        assert!(matches!(run_offline(&paths), Err(Error::ColumnCount { .. })));
        assert!(!paths.calls_out.exists());
    }
}
