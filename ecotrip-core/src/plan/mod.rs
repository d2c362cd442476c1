mod plan_error;
mod plan_outcome;
mod planning_session;
mod quick_plan;
mod request_ticket;
mod route_lookup;
pub mod share_ops;

pub use plan_error::PlanError;
pub use plan_outcome::{PlanOutcome, PlanResult};
pub use planning_session::PlanningSession;
pub use quick_plan::QuickPlan;
pub use request_ticket::RequestTicket;
pub use route_lookup::{RouteLookup, RouteSource};
