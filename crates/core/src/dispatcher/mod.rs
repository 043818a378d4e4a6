//! Request dispatcher: the inbound method surface and its router.

mod dispatcher;
mod method;

pub use dispatcher::HealthDispatcher;
pub use method::{
    HealthMethod, CHECK_AVAILABILITY, CHECK_IF_HEALTH_DATA_AVAILABLE, GET_DATA,
    GET_SUPPORTED_TYPES, REQUEST_AUTHORIZATION, WRITE_DATA,
};
