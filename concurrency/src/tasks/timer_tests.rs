use crate::tasks::{send_interval, Actor, ActorStart as _, Context, Handler, TimerHandle};
use crate::{request_messages, send_messages};
use chatter_rt::tasks as rt;
use std::time::Duration;

send_messages! {
    #[derive(Clone)]
    Inc;
    StopTimer
}

request_messages! {
    GetCount -> i32
}

struct Repeater {
    count: i32,
    timer: Option<TimerHandle>,
}

impl Repeater {
    fn new() -> Self {
        Self {
            count: 0,
            timer: None,
        }
    }
}

impl Actor for Repeater {
    async fn started(&mut self, ctx: &Context<Self>) {
        self.timer = Some(send_interval(Duration::from_millis(100), ctx.clone(), Inc));
    }
}

impl Handler<Inc> for Repeater {
    async fn handle(&mut self, _msg: Inc, _ctx: &Context<Self>) {
        self.count += 1;
    }
}

impl Handler<StopTimer> for Repeater {
    async fn handle(&mut self, _msg: StopTimer, _ctx: &Context<Self>) {
        if let Some(timer) = self.timer.take() {
            timer.cancellation_token.cancel();
        }
    }
}

impl Handler<GetCount> for Repeater {
    async fn handle(&mut self, _msg: GetCount, _ctx: &Context<Self>) -> i32 {
        self.count
    }
}

#[tokio::test(start_paused = true)]
pub async fn test_send_interval_and_cancellation() {
    // Start a Repeater
    let repeater = Repeater::new().start();

    // Wait for 1 second and a bit, so the tenth tick is not racing the request
    rt::sleep(Duration::from_millis(1050)).await;

    // 10 messages in 1 second, one every 100 milliseconds
    assert_eq!(repeater.request(GetCount).await.unwrap(), 10);

    // Pause timer
    repeater.send(StopTimer).unwrap();

    // Wait another second
    rt::sleep(Duration::from_secs(1)).await;

    // As timer was paused, count should remain at 10
    assert_eq!(repeater.request(GetCount).await.unwrap(), 10);
}

#[tokio::test(start_paused = true)]
pub async fn test_send_interval_ends_with_its_actor() {
    let repeater = Repeater::new().start();
    let timer = send_interval(Duration::from_millis(100), repeater.context(), Inc);

    rt::sleep(Duration::from_millis(250)).await;
    assert!(!timer.join_handle.is_finished());

    repeater.stop();
    rt::sleep(Duration::from_millis(250)).await;

    assert!(timer.join_handle.is_finished());
    assert!(repeater.request(GetCount).await.is_err());
}
