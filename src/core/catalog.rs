//! Static demonstration catalogs.
//!
//! The tables below are compiled into the binary and never change at runtime.
//! Listing order is part of the contract: clients render entries in the order
//! they appear here.

use crate::dto::{BenchmarkDto, DocsSectionDto, ExampleDto, FeatureDto};

pub const ROOT_GREETING: &str = "Showcase API v1.0 - Visit /api/v1/hello to get started";
pub const HEALTHY_MESSAGE: &str = "Server is healthy";
pub const SUBSCRIBED_MESSAGE: &str = "Successfully subscribed to newsletter!";
pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

const DOCS_CATEGORY: &str = "documentation";
const DOCS_TAGS: [&str; 3] = ["axum", "rust", "web-framework"];

struct ExampleEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    code: &'static str,
    language: &'static str,
    category: &'static str,
}

struct BenchmarkEntry {
    framework: &'static str,
    requests_per_second: u64,
    latency_ms: f32,
    memory_mb: u32,
    category: &'static str,
}

struct FeatureEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    benefits: [&'static str; 3],
}

static EXAMPLES: [ExampleEntry; 6] = [
    ExampleEntry {
        id: "hello-world",
        title: "Hello World Endpoint",
        description: "Create your first REST endpoint with axum",
        code: r#"async fn hello() -> Json<MessageDto> {
    Json(MessageDto {
        message: "Hello World!".to_string(),
        ..Default::default()
    })
}

let app = Router::new().route("/hello", get(hello));"#,
        language: "rust",
        category: "basics",
    },
    ExampleEntry {
        id: "post-endpoint",
        title: "POST Request Handler",
        description: "Handle POST requests with typed JSON bodies",
        code: r#"async fn create_user(Json(user): Json<UserDto>) -> Response {
    // Validate and process user data
    if user.email.is_none() {
        return (StatusCode::BAD_REQUEST, "Email required").into_response();
    }
    (StatusCode::CREATED, Json(user)).into_response()
}"#,
        language: "rust",
        category: "rest-api",
    },
    ExampleEntry {
        id: "path-params",
        title: "Path Parameters",
        description: "Extract parameters from URL paths",
        code: r#"async fn get_user(Path(user_id): Path<u32>) -> Json<UserDto> {
    Json(UserDto {
        id: user_id,
        name: format!("User {user_id}"),
    })
}

let app = Router::new().route("/users/{user_id}", get(get_user));"#,
        language: "rust",
        category: "rest-api",
    },
    ExampleEntry {
        id: "query-params",
        title: "Query Parameters",
        description: "Handle URL query parameters",
        code: r#"#[derive(Deserialize)]
struct Search {
    q: String,
    limit: Option<u32>,
}

async fn search(Query(params): Query<Search>) -> Json<ResultDto> {
    Json(ResultDto {
        query: params.q,
        limit: params.limit.unwrap_or(10),
    })
}"#,
        language: "rust",
        category: "rest-api",
    },
    ExampleEntry {
        id: "async-handler",
        title: "Async Request Handler",
        description: "Non-blocking asynchronous endpoints",
        code: r#"async fn slow_report(State(db): State<Db>) -> Json<ReportDto> {
    let rows = db.fetch_report().await;
    Json(ReportDto::from(rows))
}"#,
        language: "rust",
        category: "advanced",
    },
    ExampleEntry {
        id: "websocket",
        title: "WebSocket Connection",
        description: "Real-time bidirectional communication",
        code: r#"async fn ws(upgrade: WebSocketUpgrade) -> Response {
    upgrade.on_upgrade(|mut socket| async move {
        while let Some(Ok(msg)) = socket.recv().await {
            let _ = socket.send(msg).await;
        }
    })
}"#,
        language: "rust",
        category: "websocket",
    },
];

static BENCHMARKS: [BenchmarkEntry; 5] = [
    BenchmarkEntry {
        framework: "Axum",
        requests_per_second: 520_000,
        latency_ms: 0.18,
        memory_mb: 9,
        category: "rust",
    },
    BenchmarkEntry {
        framework: "Express.js",
        requests_per_second: 25_000,
        latency_ms: 8.0,
        memory_mb: 45,
        category: "javascript",
    },
    BenchmarkEntry {
        framework: "FastAPI",
        requests_per_second: 18_000,
        latency_ms: 12.0,
        memory_mb: 38,
        category: "python",
    },
    BenchmarkEntry {
        framework: "Spring Boot",
        requests_per_second: 22_000,
        latency_ms: 10.0,
        memory_mb: 150,
        category: "java",
    },
    BenchmarkEntry {
        framework: "ASP.NET Core",
        requests_per_second: 85_000,
        latency_ms: 2.5,
        memory_mb: 35,
        category: "csharp",
    },
];

static FEATURES: [FeatureEntry; 4] = [
    FeatureEntry {
        id: "performance",
        title: "Blazing Fast Performance",
        description: "Handle hundreds of thousands of requests per second with minimal latency",
        icon: "zap",
        benefits: ["500K+ req/sec", "Sub-millisecond latency", "Low CPU usage"],
    },
    FeatureEntry {
        id: "lightweight",
        title: "Small Footprint",
        description: "A single static binary with no runtime to install",
        icon: "feather",
        benefits: ["Small binary size", "Easy deployment", "No garbage collector"],
    },
    FeatureEntry {
        id: "typesafe",
        title: "Type-Safe DTOs",
        description: "Compile-time type checking for all API endpoints",
        icon: "shield",
        benefits: ["Catch errors early", "Auto serialization", "Clear API contracts"],
    },
    FeatureEntry {
        id: "async",
        title: "Async/Await Support",
        description: "Non-blocking I/O for maximum concurrency",
        icon: "cpu",
        benefits: [
            "Handle 10K+ connections",
            "Efficient resource use",
            "Scalable design",
        ],
    },
];

pub fn examples() -> Vec<ExampleDto> {
    EXAMPLES
        .iter()
        .map(|e| ExampleDto {
            id: e.id.to_string(),
            title: e.title.to_string(),
            description: e.description.to_string(),
            code: e.code.to_string(),
            language: e.language.to_string(),
            category: e.category.to_string(),
        })
        .collect()
}

pub fn benchmarks() -> Vec<BenchmarkDto> {
    BENCHMARKS
        .iter()
        .map(|b| BenchmarkDto {
            framework: b.framework.to_string(),
            requests_per_second: b.requests_per_second,
            latency_ms: b.latency_ms,
            memory_mb: b.memory_mb,
            category: b.category.to_string(),
        })
        .collect()
}

pub fn features() -> Vec<FeatureDto> {
    FEATURES
        .iter()
        .map(|f| FeatureDto {
            id: f.id.to_string(),
            title: f.title.to_string(),
            description: f.description.to_string(),
            icon: f.icon.to_string(),
            benefits: f.benefits.iter().map(|b| b.to_string()).collect(),
        })
        .collect()
}

/// Build a documentation stub for `section`. No content store backs this; the
/// section name is echoed back as-is.
pub fn docs_section(section: &str) -> DocsSectionDto {
    DocsSectionDto {
        id: section.to_string(),
        title: format!("Documentation: {section}"),
        content: format!("Documentation content for {section} section"),
        category: DOCS_CATEGORY.to_string(),
        tags: DOCS_TAGS.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(examples().len(), 6);
        assert_eq!(benchmarks().len(), 5);
        assert_eq!(features().len(), 4);
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<_> = examples().into_iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            [
                "hello-world",
                "post-endpoint",
                "path-params",
                "query-params",
                "async-handler",
                "websocket"
            ]
        );
        assert_eq!(examples(), examples());

        let frameworks: Vec<_> = benchmarks().into_iter().map(|b| b.framework).collect();
        assert_eq!(
            frameworks,
            ["Axum", "Express.js", "FastAPI", "Spring Boot", "ASP.NET Core"]
        );

        let feature_ids: Vec<_> = features().into_iter().map(|f| f.id).collect();
        assert_eq!(feature_ids, ["performance", "lightweight", "typesafe", "async"]);
    }

    #[test]
    fn test_example_ids_are_unique() {
        let mut ids: Vec<_> = examples().into_iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_docs_section_echoes_name() {
        let docs = docs_section("networking");
        assert_eq!(docs.id, "networking");
        assert_eq!(docs.title, "Documentation: networking");
        assert_eq!(docs.content, "Documentation content for networking section");
        assert_eq!(docs.category, "documentation");
        assert_eq!(docs.tags, ["axum", "rust", "web-framework"]);
    }
}
