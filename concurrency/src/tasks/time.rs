use futures::future::select;
use std::time::Duration;

use chatter_rt::tasks::{self as rt, CancellationToken, JoinHandle};

use super::{Actor, Context, Handler};
use crate::message::Message;
use core::pin::pin;

pub struct TimerHandle {
    pub join_handle: JoinHandle<()>,
    pub cancellation_token: CancellationToken,
}

// Sends a message to the specified Actor repeatedly, once every `period`.
pub fn send_interval<A, M>(period: Duration, ctx: Context<A>, message: M) -> TimerHandle
where
    A: Actor + Handler<M>,
    M: Message + Clone,
{
    let cancellation_token = CancellationToken::new();
    let cloned_token = cancellation_token.clone();
    let actor_cancellation_token = ctx.cancellation_token();
    let join_handle = rt::spawn(async move {
        loop {
            // Timer action is ignored if it was either cancelled or the associated Actor is no longer running.
            let cancel_token_fut = pin!(cloned_token.cancelled());
            let actor_cancel_fut = pin!(actor_cancellation_token.cancelled());
            let cancel_conditions = select(cancel_token_fut, actor_cancel_fut);

            let message_clone = message.clone();
            let ctx_reference = &ctx;
            let async_block = pin!(async move {
                rt::sleep(period).await;
                let _ = ctx_reference.send(message_clone);
            });
            let result = select(cancel_conditions, async_block).await;
            match result {
                futures::future::Either::Left(_) => break,
                futures::future::Either::Right(_) => (),
            }
        }
    });
    TimerHandle {
        join_handle,
        cancellation_token,
    }
}
