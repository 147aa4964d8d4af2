use client_core::{
    windows::{demo, media},
    NoService,
};
use shared::error::ServiceError;

use super::*;

struct StubService {
    requests: Vec<String>,
    reply: &'static str,
}

impl ServiceCollaborator for StubService {
    fn send(&mut self, request: &str) -> Result<String, ServiceError> {
        self.requests.push(request.to_string());
        Ok(self.reply.to_string())
    }
}

fn drive<C: ServiceCollaborator>(window: &mut CommandWindow<C>, script: &str) -> String {
    let mut out = Vec::new();
    run(window, script.as_bytes(), &mut out).expect("run");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn stops_reading_after_exit() {
    let mut window = demo::window(NoService).expect("window");

    let echoed = drive(&mut window, "button Button1\nmenu Button3\nbutton Button1\n");

    assert_eq!(echoed, demo::FIRST_TEXT);
    assert_eq!(window.output().fragments(), [demo::FIRST_TEXT]);
    assert!(window.is_terminated());
}

#[test]
fn echoes_the_service_reply() {
    let mut window = media::window(StubService {
        requests: Vec::new(),
        reply: "3 results found",
    })
    .expect("window");

    let echoed = drive(&mut window, ":text Beethoven\nbutton Search\n");

    assert_eq!(echoed, "3 results found\n");
    assert_eq!(window.collaborator().requests, ["search Beethoven"]);
    assert_eq!(window.input().text(), "");
}

#[test]
fn prints_only_what_each_control_adds() {
    let mut window = demo::window(NoService).expect("window");

    let echoed = drive(&mut window, "button Button1\n\nmenu Button2\n:show\n");

    let both = format!("{}{}", demo::FIRST_TEXT, demo::SECOND_TEXT);
    assert_eq!(echoed, format!("{both}{both}"));
}

#[test]
fn keeps_going_after_a_failed_exchange() {
    let mut window = media::window(NoService).expect("window");

    let echoed = drive(
        &mut window,
        ":text x\nbutton Search\nbutton Nope\ntoolbar Save\nbutton Exit\nbutton Play\n",
    );

    assert!(echoed.starts_with("error: service unavailable"), "{echoed}");
    assert_eq!(echoed.lines().count(), 1);
    assert_eq!(window.input().text(), "x");
    assert!(window.is_terminated());
}
