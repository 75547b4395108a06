pub mod estimator;
pub mod geodesic;
pub mod planner;
