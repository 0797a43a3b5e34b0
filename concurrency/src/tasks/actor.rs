//! Actor trait and structs to run message handlers on their own task.
use chatter_rt::tasks::{self as rt, mpsc, oneshot, CancellationToken};
use core::pin::Pin;
use futures::FutureExt as _;
use std::{fmt::Debug, future::Future, panic::AssertUnwindSafe, sync::Arc, time::Duration};

use crate::error::ActorError;
use crate::message::Message;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Actor trait
// ---------------------------------------------------------------------------

pub trait Actor: Send + Sized + 'static {
    fn started(&mut self, _ctx: &Context<Self>) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn stopped(&mut self, _ctx: &Context<Self>) -> impl Future<Output = ()> + Send {
        async {}
    }
}

// ---------------------------------------------------------------------------
// Handler trait (per-message)
// ---------------------------------------------------------------------------

pub trait Handler<M: Message>: Actor {
    fn handle(&mut self, msg: M, ctx: &Context<Self>) -> impl Future<Output = M::Result> + Send;
}

// ---------------------------------------------------------------------------
// Envelope (type-erasure)
// ---------------------------------------------------------------------------

type BoxFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

trait Envelope<A: Actor>: Send {
    fn handle<'a>(self: Box<Self>, actor: &'a mut A, ctx: &'a Context<A>) -> BoxFuture<'a>;
}

type Mailbox<A> = mpsc::UnboundedSender<Box<dyn Envelope<A> + Send>>;

struct MessageEnvelope<M: Message> {
    msg: M,
    tx: Option<oneshot::Sender<M::Result>>,
}

impl<A, M> Envelope<A> for MessageEnvelope<M>
where
    A: Actor + Handler<M>,
    M: Message,
{
    fn handle<'a>(self: Box<Self>, actor: &'a mut A, ctx: &'a Context<A>) -> BoxFuture<'a> {
        let MessageEnvelope { msg, tx } = *self;
        Box::pin(async move {
            let result = actor.handle(msg, ctx).await;
            if let Some(tx) = tx {
                let _ = tx.send(result);
            }
        })
    }
}

fn post<A, M>(sender: &Mailbox<A>, msg: M) -> Result<(), ActorError>
where
    A: Actor + Handler<M>,
    M: Message,
{
    let envelope = MessageEnvelope { msg, tx: None };
    sender
        .send(Box::new(envelope))
        .map_err(|_| ActorError::ActorStopped)
}

fn post_request<A, M>(
    sender: &Mailbox<A>,
    msg: M,
) -> Result<oneshot::Receiver<M::Result>, ActorError>
where
    A: Actor + Handler<M>,
    M: Message,
{
    let (tx, rx) = oneshot::channel();
    let envelope = MessageEnvelope {
        msg,
        tx: Some(tx),
    };
    sender
        .send(Box::new(envelope))
        .map_err(|_| ActorError::ActorStopped)?;
    Ok(rx)
}

async fn await_reply<T>(rx: oneshot::Receiver<T>, duration: Duration) -> Result<T, ActorError> {
    match rt::timeout(duration, rx).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(_)) => Err(ActorError::ActorStopped),
        Err(_) => Err(ActorError::RequestTimeout),
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

pub struct Context<A: Actor> {
    sender: Mailbox<A>,
    cancellation_token: CancellationToken,
}

impl<A: Actor> Clone for Context<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<A: Actor> Debug for Context<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

impl<A: Actor> Context<A> {
    pub fn from_ref(actor_ref: &ActorRef<A>) -> Self {
        Self {
            sender: actor_ref.sender.clone(),
            cancellation_token: actor_ref.cancellation_token.clone(),
        }
    }

    pub fn stop(&self) {
        self.cancellation_token.cancel();
    }

    pub fn send<M>(&self, msg: M) -> Result<(), ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        post(&self.sender, msg)
    }

    pub fn request_raw<M>(&self, msg: M) -> Result<oneshot::Receiver<M::Result>, ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        post_request(&self.sender, msg)
    }

    pub fn recipient<M>(&self) -> Recipient<M>
    where
        A: Handler<M>,
        M: Message,
    {
        Arc::new(self.clone())
    }

    pub fn actor_ref(&self) -> ActorRef<A> {
        ActorRef {
            sender: self.sender.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }

    pub(crate) fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }
}

// Bridge: Context<A> implements Receiver<M> for any M that A handles
impl<A, M> Receiver<M> for Context<A>
where
    A: Actor + Handler<M>,
    M: Message,
{
    fn send(&self, msg: M) -> Result<(), ActorError> {
        Context::send(self, msg)
    }

    fn request_raw(&self, msg: M) -> Result<oneshot::Receiver<M::Result>, ActorError> {
        Context::request_raw(self, msg)
    }
}

// ---------------------------------------------------------------------------
// Receiver trait (object-safe) + Recipient alias
// ---------------------------------------------------------------------------

pub trait Receiver<M: Message>: Send + Sync {
    fn send(&self, msg: M) -> Result<(), ActorError>;
    fn request_raw(&self, msg: M) -> Result<oneshot::Receiver<M::Result>, ActorError>;
}

pub type Recipient<M> = Arc<dyn Receiver<M>>;

pub async fn request<M: Message>(
    recipient: &dyn Receiver<M>,
    msg: M,
    timeout: Duration,
) -> Result<M::Result, ActorError> {
    let rx = recipient.request_raw(msg)?;
    await_reply(rx, timeout).await
}

// ---------------------------------------------------------------------------
// ActorRef
// ---------------------------------------------------------------------------

pub struct ActorRef<A: Actor> {
    sender: Mailbox<A>,
    cancellation_token: CancellationToken,
}

impl<A: Actor> Debug for ActorRef<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorRef").finish_non_exhaustive()
    }
}

impl<A: Actor> Clone for ActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<A: Actor> ActorRef<A> {
    pub fn send<M>(&self, msg: M) -> Result<(), ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        post(&self.sender, msg)
    }

    pub fn request_raw<M>(&self, msg: M) -> Result<oneshot::Receiver<M::Result>, ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        post_request(&self.sender, msg)
    }

    pub async fn request<M>(&self, msg: M) -> Result<M::Result, ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        self.request_with_timeout(msg, DEFAULT_REQUEST_TIMEOUT).await
    }

    pub async fn request_with_timeout<M>(
        &self,
        msg: M,
        duration: Duration,
    ) -> Result<M::Result, ActorError>
    where
        A: Handler<M>,
        M: Message,
    {
        let rx = self.request_raw(msg)?;
        await_reply(rx, duration).await
    }

    pub fn recipient<M>(&self) -> Recipient<M>
    where
        A: Handler<M>,
        M: Message,
    {
        Arc::new(self.clone())
    }

    pub fn context(&self) -> Context<A> {
        Context::from_ref(self)
    }

    pub fn stop(&self) {
        self.cancellation_token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }
}

// Bridge: ActorRef<A> implements Receiver<M> for any M that A handles
impl<A, M> Receiver<M> for ActorRef<A>
where
    A: Actor + Handler<M>,
    M: Message,
{
    fn send(&self, msg: M) -> Result<(), ActorError> {
        ActorRef::send(self, msg)
    }

    fn request_raw(&self, msg: M) -> Result<oneshot::Receiver<M::Result>, ActorError> {
        ActorRef::request_raw(self, msg)
    }
}

// ---------------------------------------------------------------------------
// Actor startup + main loop
// ---------------------------------------------------------------------------

impl<A: Actor> ActorRef<A> {
    fn spawn(actor: A) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Box<dyn Envelope<A> + Send>>();
        let actor_ref = ActorRef {
            sender: tx,
            cancellation_token: CancellationToken::new(),
        };
        let ctx = actor_ref.context();
        // Ignore the JoinHandle for now. Maybe we'll use it in the future
        let _join_handle = rt::spawn(run_actor(actor, ctx, rx));
        actor_ref
    }
}

pub trait ActorStart: Actor {
    fn start(self) -> ActorRef<Self> {
        ActorRef::spawn(self)
    }
}

impl<A: Actor> ActorStart for A {}

async fn run_actor<A: Actor>(
    mut actor: A,
    ctx: Context<A>,
    mut rx: mpsc::UnboundedReceiver<Box<dyn Envelope<A> + Send>>,
) {
    let cancellation_token = ctx.cancellation_token();
    actor.started(&ctx).await;

    loop {
        let envelope = rt::select! {
            _ = cancellation_token.cancelled() => break,
            envelope = rx.recv() => match envelope {
                Some(envelope) => envelope,
                None => break,
            },
        };
        let result = AssertUnwindSafe(envelope.handle(&mut actor, &ctx))
            .catch_unwind()
            .await;
        if let Err(panic) = result {
            tracing::error!("Panic in message handler: {panic:?}");
            break;
        }
    }

    cancellation_token.cancel();
    actor.stopped(&ctx).await;
    tracing::trace!("Stopping Actor");
}
