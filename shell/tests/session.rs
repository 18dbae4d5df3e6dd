//! Scripted terminal session against the live mock server.

use todo_core::{TodoApi, TodoClient};
use todo_shell::terminal::{TerminalForm, TerminalView};
use todo_shell::{run_session, UreqTransport};

fn start_server() -> std::net::SocketAddr {
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
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

#[test]
fn scripted_session() {
    let addr = start_server();
    let mut client = TodoClient::new(
        TodoApi::new(&format!("http://{addr}")),
        UreqTransport::new(),
        TerminalView::new(Vec::new()),
        TerminalForm::new(Vec::new()),
    );
    client.initialize().unwrap();

    let script = [
        "add Buy milk",
        "add    ",
        "add Walk dog",
        "complete 1",
        "delete 2",
        "bogus",
        "quit",
        "add never sent",
    ]
    .join("\n");
    let mut out = Vec::new();
    run_session(&mut client, script.as_bytes(), &mut out).unwrap();

    let screen = String::from_utf8(client.view().get_ref().clone()).unwrap();
    let frames: Vec<&str> = screen.split("-- todos --\n").skip(1).collect();
    // initial + add + add + complete + delete
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0], "(empty)\n");
    assert_eq!(
        frames[4],
        "[x] Buy milk  <Complete: complete 1>  <Delete: delete 1>\n"
    );

    let alerts = String::from_utf8(client.form().get_ref().clone()).unwrap();
    assert_eq!(alerts, "! Please enter a todo title.\n");

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("unknown command `bogus`"));
}

#[test]
fn failed_action_keeps_last_frame() {
    let addr = start_server();
    let mut client = TodoClient::new(
        TodoApi::new(&format!("http://{addr}")),
        UreqTransport::new(),
        TerminalView::new(Vec::new()),
        TerminalForm::new(Vec::new()),
    );
    client.initialize().unwrap();

    let mut out = Vec::new();
    run_session(&mut client, "delete 7\ncomplete 7\n".as_bytes(), &mut out).unwrap();

    let screen = String::from_utf8(client.view().get_ref().clone()).unwrap();
    assert_eq!(screen, "-- todos --\n(empty)\n");
}
