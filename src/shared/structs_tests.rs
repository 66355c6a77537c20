/*
 * Unit tests for the shared data structures
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_building_valid
 *  - test_building_without_elevators
 *  - test_building_sparse_ids
 *  - test_building_duplicate_ids
 *  - test_elevator_non_positive_speed
 *  - test_elevator_negative_timing
 *  - test_call_allocation_state
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::{Building, Elevator, ElevatorCall, Error};

    fn building_with_ids(ids: &[usize]) -> Building {
        let elevators = ids
            .iter()
            .map(|&id| Elevator::new(id, 1.0, -2, 10))
            .collect();
        Building::new(-2, 10, elevators)
    }

    #[test]
    fn test_building_valid() {
        // Arrange
        let building = building_with_ids(&[2, 0, 1]);

        // Act
        let result = building.validate();

        // Assert
        assert!(result.is_ok());
        assert_eq!(building.number_of_elevators(), 3);
    }

    #[test]
    fn test_building_without_elevators() {
        let building = building_with_ids(&[]);

        assert!(matches!(building.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_building_sparse_ids() {
        let building = building_with_ids(&[0, 2]);

        match building.validate() {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("id 2")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_building_duplicate_ids() {
        let building = building_with_ids(&[0, 0]);

        match building.validate() {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("more than once")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_elevator_non_positive_speed() {
        // Arrange
        let mut building = building_with_ids(&[0, 1]);
        building.elevators[1].speed = 0.0;

        // Act
        let result = building.validate();

        // Assert
        match result {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("elevator 1")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        building.elevators[1].speed = f64::NAN;
        assert!(building.validate().is_err());
    }

    #[test]
    fn test_elevator_negative_timing() {
        let mut building = building_with_ids(&[0]);
        building.elevators[0].open_time = -1.0;

        match building.validate() {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("open_time")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_call_allocation_state() {
        let call = ElevatorCall::new(3.5, 0, 7);
        let preallocated = ElevatorCall::allocated(4.0, 7, 0, 2);

        assert!(!call.is_allocated());
        assert_eq!(call.allocated_to_elevator, None);
        assert!(preallocated.is_allocated());
        assert_eq!(preallocated.allocated_to_elevator, Some(2));
    }
}
