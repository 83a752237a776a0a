//! Runs the `blog-client` binary against a live mock server.

use std::net::SocketAddr;
use std::process::{Command, Output};

use serde_json::Value;

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, None).await
        })
        .unwrap();
    });

    addr
}

fn blog_client(addr: SocketAddr, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blog-client"))
        .arg("--url")
        .arg(format!("http://{addr}"))
        .args(args)
        .env_remove("BLOG_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn missing_content_prints_usage_and_exits_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_blog-client"))
        .arg("Only a title")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: blog-client"));
    assert!(output.stdout.is_empty());
}

#[test]
fn create_then_read_back() {
    let addr = start_server();

    let output = blog_client(addr, &["Hello", "First post", "intro", "happy", "--date", "2024-01-01"]);
    assert!(output.status.success());
    let created = stdout_json(&output);
    assert_eq!(created["success"], true);
    assert_eq!(created["post"]["tags"], "intro");
    assert_eq!(created["post"]["mood"], "happy");

    // pretty-printed with two-space indentation
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("{\n  \""), "{text}");

    let fetched = stdout_json(&blog_client(addr, &["--get", "--date", "2024-01-01"]));
    assert_eq!(fetched["title"], "Hello");

    let stats = stdout_json(&blog_client(addr, &["--stats"]));
    assert_eq!(stats["total_posts"], 1);

    let posts = stdout_json(&blog_client(addr, &["--list"]));
    assert_eq!(posts.as_array().unwrap().len(), 1);
}

#[test]
fn missing_post_prints_null() {
    let addr = start_server();
    let output = blog_client(addr, &["--get", "--date", "1999-12-31"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "null");
}

#[test]
fn defaults_are_daily_and_focused() {
    let addr = start_server();
    let created = stdout_json(&blog_client(addr, &["Title", "Body"]));
    assert_eq!(created["post"]["tags"], "daily");
    assert_eq!(created["post"]["mood"], "focused");
}

#[test]
fn markdown_list_content_and_extra_arguments() {
    let addr = start_server();
    let content = "- shipped the client\n- wrote tests";
    let output = blog_client(addr, &["-1 day to launch", content, "notes", "happy", "ignored", "--date", "2024-02-01"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let fetched = stdout_json(&blog_client(addr, &["--get", "--date", "2024-02-01"]));
    assert_eq!(fetched["title"], "-1 day to launch");
    assert_eq!(fetched["content"], content);
    assert_eq!(fetched["mood"], "happy");
}
