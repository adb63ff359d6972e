pub mod backlog;
pub mod cash;
pub mod funnel;
pub mod headcount;
pub mod offer;
pub mod scenario;
pub mod stage;
