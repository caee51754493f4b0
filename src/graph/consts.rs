pub const GRAPH_URL_BASE: &str = "https://graph.facebook.com";
