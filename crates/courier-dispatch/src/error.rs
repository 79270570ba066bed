use courier_core::OrderId;
use courier_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("route map error: {0}")]
    Graph(#[from] GraphError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
