// Owner of the toast queue. Any descendant may enqueue or dismiss,
// the Toaster reads the queue to draw it.

use super::queue::{Toast, ToastId, ToastQueue, ToastRequest};
use crate::components::imports::*;
use crate::conf::ToastConf;

#[derive(derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    conf: ToastConf,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    msg_cb: Callback<Msg>,
}

impl ToastState {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn conf(&self) -> &ToastConf {
        &self.conf
    }

    pub fn toast(&self, request: ToastRequest) {
        self.msg_cb.emit(Msg::Add(request));
    }

    pub fn update(&self, id: ToastId, request: ToastRequest) {
        self.msg_cb.emit(Msg::Update(id, request));
    }

    pub fn dismiss(&self, id: ToastId) {
        self.msg_cb.emit(Msg::Dismiss(Some(id)));
    }

    pub fn dismiss_all(&self) {
        self.msg_cb.emit(Msg::Dismiss(None));
    }

    pub fn remove(&self, id: ToastId) {
        self.msg_cb.emit(Msg::Remove(Some(id)));
    }
}

pub type ToastCtx = Rc<ToastState>;

#[hook]
pub fn use_toast() -> ToastCtx {
    use_context::<ToastCtx>().expect("ToastCtx to exist")
}

pub struct WithToasts {
    queue: ToastQueue,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub conf: ToastConf,
    #[prop_or_default]
    pub children: Children,
}

#[derive(Debug)]
pub enum Msg {
    Add(ToastRequest),
    Update(ToastId, ToastRequest),
    Dismiss(Option<ToastId>),
    Remove(Option<ToastId>),
}

impl Component for WithToasts {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            queue: ToastQueue::new(ctx.props().conf.limit),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(ToastState {
            toasts: self.queue.toasts().to_vec(),
            conf: ctx.props().conf.clone(),
            msg_cb: ctx.link().callback(|msg| msg),
        });

        html! {
            <ContextProvider<ToastCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<ToastCtx>>
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let limit = ctx.props().conf.limit;
        if limit != old_props.conf.limit {
            self.queue.set_limit(limit);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        console::log!(format!("toasts: {:?}", msg));
        match msg {
            Msg::Add(request) => {
                self.queue.add(request);
                true
            }
            Msg::Update(id, request) => self.queue.update(id, request),
            Msg::Dismiss(id) => self.queue.dismiss(id),
            Msg::Remove(id) => self.queue.remove(id),
        }
    }
}
