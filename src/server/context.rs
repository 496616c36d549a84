//! State shared by the handler functions.

use crate::Catalog;

/**
 * Application-specific context (state shared by handler functions)
 */
pub struct Context {
    /// The OpenAPI document served at `/`.
    pub schema: serde_json::Value,
    /// The server's logger.
    pub logger: slog::Logger,
    /// The products on offer.
    pub catalog: Catalog,
}

impl Context {
    /**
     * Return a new Context.
     */
    pub fn new(schema: serde_json::Value, logger: slog::Logger, catalog: Catalog) -> Context {
        Context {
            schema,
            logger,
            catalog,
        }
    }
}
