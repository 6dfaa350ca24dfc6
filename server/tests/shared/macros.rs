#[macro_export]
macro_rules! request {
    ( $method:ident $url:expr ; $($header:expr => $value:expr),* ; $($body:expr)? ) => {{
        let mut req = axum::http::Request::builder()
            .method(stringify!($method))
            .uri($url);

        $(
            req = req.header($header, $value);
        )*

        #[allow(unused_mut, unused_assignments)]
        let mut body = axum::body::Body::empty();
        $(
            body = axum::body::Body::from($body);
        )?

        req.body(body).expect("unable to build request")
    }};
}
