use std::rc::Rc;

use yew::functional::use_reducer_eq;
use yew::prelude::*;

use super::context::{MessageContext, MessageToast};
use super::controller::{Dispatch, HideController};
use super::scheduler::BrowserScheduler;
use super::state::{HidePolicy, MessageAction, NotificationState};

#[derive(Properties, Clone, PartialEq)]
pub struct MessageProviderProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub policy: HidePolicy,
}

#[function_component(MessageProvider)]
pub fn message_provider(props: &MessageProviderProps) -> Html {
    let state = use_reducer_eq(NotificationState::default);

    // One controller per provider; it keeps the ticket counter across renders.
    let controller = {
        let policy = props.policy;
        use_memo((), move |_| HideController::new(BrowserScheduler, policy))
    };

    {
        let controller = Rc::clone(&controller);
        use_effect_with(props.policy, move |policy| {
            controller.set_policy(*policy);
            || ()
        });
    }

    let show = {
        let dispatcher = state.dispatcher();
        let controller = Rc::clone(&controller);
        use_memo((), move |_| {
            let dispatch: Dispatch = Rc::new(move |action: MessageAction| dispatcher.dispatch(action));
            Callback::from(move |(text, is_error): (String, bool)| {
                controller.show(text, is_error, &dispatch);
            })
        })
    };

    let context = MessageContext::new((*state).clone(), (*show).clone());

    html! {
        <ContextProvider<MessageContext> context={context}>
            {props.children.clone()}
            <MessageToast />
        </ContextProvider<MessageContext>>
    }
}
