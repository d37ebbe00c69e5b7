use std::sync::Arc;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;

/// A route endpoint. The router never looks inside it.
pub type Handler<C> = Arc<dyn Fn(&mut C) -> HandlerResult + Send + Sync>;

/// Wraps the next handler in the chain.
pub type Middleware<C> = Arc<dyn Fn(Handler<C>) -> Handler<C> + Send + Sync>;

pub fn handler_fn<C, F>(f: F) -> Handler<C>
where
    F: Fn(&mut C) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn middleware_fn<C, F>(f: F) -> Middleware<C>
where
    F: Fn(Handler<C>) -> Handler<C> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps `handler` in the route middlewares, then the global ones. Within
/// each list the last entry sits closest to the handler, so middlewares run
/// in declaration order with globals outermost.
pub(crate) fn compose<C>(
    handler: Handler<C>,
    route: &[Middleware<C>],
    global: &[Middleware<C>],
) -> Handler<C> {
    let wrapped = route.iter().rev().fold(handler, |next, middleware| middleware(next));
    global.iter().rev().fold(wrapped, |next, middleware| middleware(next))
}
