pub mod about;
pub mod external;
pub mod launch;
pub mod menu;
pub mod quiz;
pub mod results;
pub mod review;
pub mod tips;
pub mod welcome;
