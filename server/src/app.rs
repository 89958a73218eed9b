//! The HTTP router in front of the schema.
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{MethodRouter, get, post},
};
use bookshelf::BookshelfSchema;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// The path GraphQL requests are served on.
pub(crate) const ENDPOINT: &str = "/graphql";

/// Builds the router, with any origin allowed to call it.
///
/// GraphQL is served on `POST /graphql`, and the `GraphiQL` IDE on `GET /graphql` when
/// `with_graphiql` is set.
pub(crate) fn build_app(schema: BookshelfSchema, with_graphiql: bool) -> Router {
    let route: MethodRouter<BookshelfSchema> = if with_graphiql {
        get(graphiql).post(handler)
    } else {
        post(handler)
    };

    Router::new()
        .route(ENDPOINT, route)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Serves the `GraphiQL` IDE, pointed at [`ENDPOINT`].
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

/// The handler. It's the function that's run when there's a GraphQL request.
async fn handler(
    State(schema): State<BookshelfSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(graphql_request.into_inner()).await.into()
}
