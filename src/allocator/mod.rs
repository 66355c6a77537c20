pub mod allocator;

pub use allocator::allocate;
pub use allocator::allocate_with_report;
pub use allocator::compute_weights;
pub use allocator::fastest_elevator;
pub use allocator::AllocationReport;
