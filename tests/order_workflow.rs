//! End-to-end order workflows driven through the public API.

use std::sync::{Arc, Mutex};
use transitions::builder::{first_candidate, simple_transition, StateMachineBuilder};
use transitions::core::{Event, State};
use transitions::labels;
use transitions::machine::{
    ActionError, EventProcessor, HookError, HookResult, StateMachine, Transition, TriggerError,
};

const INITIAL: &str = "Initial";
const WAIT_PAY: &str = "WaitPay";
const PAYING: &str = "Paying";
const WAIT_SEND: &str = "WaitSend";
const PAY_SUCCESS: &str = "PaySuccess";
const PAY_FAIL: &str = "PayFail";

const CREATE: &str = "Create";
const PAY: &str = "Pay";
const PAY_SUCCESS_EVENT: &str = "PaySuccess";

struct Order {
    id: u64,
    paid: bool,
}

/// Collects every hook call together with the order it was made for.
#[derive(Clone, Default)]
struct OrderEventProcessor {
    log: Arc<Mutex<Vec<String>>>,
}

impl OrderEventProcessor {
    fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl EventProcessor<Order> for OrderEventProcessor {
    fn on_exit(&self, order: &Order, state: &State, event: &Event) -> HookResult {
        self.log
            .lock()
            .unwrap()
            .push(format!("order {} exit {state} on {event}", order.id));
        Ok(())
    }

    fn on_action_failure(
        &self,
        order: &Order,
        from: &State,
        event: &Event,
        candidates: &[State],
        error: &TriggerError,
    ) -> HookResult {
        self.log.lock().unwrap().push(format!(
            "order {} failed {from} --{event}--> {} ({})",
            order.id,
            candidates.len(),
            matches!(error, TriggerError::ActionFailed { .. })
        ));
        Ok(())
    }

    fn on_enter(&self, order: &Order, state: &State) -> HookResult {
        self.log
            .lock()
            .unwrap()
            .push(format!("order {} enter {state}", order.id));
        Err(HookError::new("notification service offline"))
    }
}

fn pay_action(
    order: &Order,
    _from: &State,
    _event: &Event,
    _candidates: &[State],
) -> Result<State, ActionError> {
    if order.paid {
        Ok(State::from(PAY_SUCCESS))
    } else {
        Ok(State::from(PAY_FAIL))
    }
}

#[test]
fn order_moves_through_linear_workflow() {
    let mut machine = StateMachine::builder("myFirstStateMachine")
        .states(labels! {
            INITIAL => "start",
            WAIT_PAY => "awaiting payment",
            PAYING => "paying",
            WAIT_SEND => "awaiting shipment",
        })
        .events(labels! {
            CREATE => "create order",
            PAY => "pay",
            PAY_SUCCESS_EVENT => "payment succeeded",
        })
        .transitions(vec![
            simple_transition(INITIAL, CREATE, WAIT_PAY),
            simple_transition(WAIT_PAY, PAY, PAYING),
            simple_transition(PAYING, PAY_SUCCESS_EVENT, WAIT_SEND),
        ])
        .build();

    let order = Order { id: 1, paid: true };

    assert_eq!(machine.current_state().unwrap(), INITIAL);
    assert_eq!(machine.trigger(&order, CREATE).unwrap(), WAIT_PAY);
    assert_eq!(machine.trigger(&order, PAY).unwrap(), PAYING);
    assert_eq!(machine.trigger(&order, PAY_SUCCESS_EVENT).unwrap(), WAIT_SEND);
    assert_eq!(machine.current_state().unwrap(), WAIT_SEND);

    let path = machine.history().get_path();
    assert_eq!(path, vec![INITIAL, WAIT_PAY, PAYING, WAIT_SEND]);
}

#[test]
fn unpaid_order_lands_in_pay_fail() {
    let mut machine = StateMachine::builder("myFirstStateMachine")
        .states(labels! {
            INITIAL => "start",
            WAIT_PAY => "awaiting payment",
            PAY_SUCCESS => "paid",
            PAY_FAIL => "payment failed",
        })
        .events(labels! { CREATE => "create order", PAY => "pay" })
        .transitions(vec![
            Transition::new(INITIAL, CREATE, [WAIT_PAY], first_candidate),
            Transition::new(WAIT_PAY, PAY, [PAY_SUCCESS, PAY_FAIL], pay_action),
        ])
        .current_state(WAIT_PAY)
        .build();

    let order = Order { id: 7, paid: false };
    let state = machine.trigger(&order, PAY).unwrap();

    assert_eq!(state, PAY_FAIL);
    assert_eq!(machine.current_state().unwrap(), PAY_FAIL);
}

#[test]
fn unregistered_current_state_fails_before_hooks() {
    let processor = OrderEventProcessor::default();
    let mut machine = StateMachine::builder("orders")
        .states(labels! { WAIT_PAY => "awaiting payment", PAY_SUCCESS => "paid" })
        .events(labels! { PAY => "pay" })
        .transition(
            Transition::new(WAIT_PAY, PAY, [PAY_SUCCESS, PAY_FAIL], pay_action)
                .with_processor(processor.clone()),
        )
        .current_state(PAY_FAIL)
        .build();

    let result = machine.trigger(&Order { id: 3, paid: true }, PAY);

    assert!(
        matches!(result, Err(TriggerError::UnknownState { ref state }) if state == PAY_FAIL)
    );
    assert!(processor.entries().is_empty());
}

#[test]
fn processor_observes_context_and_survives_hook_errors() {
    let processor = OrderEventProcessor::default();
    let mut machine = StateMachine::builder("orders")
        .states(labels! {
            WAIT_PAY => "awaiting payment",
            PAY_SUCCESS => "paid",
            PAY_FAIL => "payment failed",
        })
        .events(labels! { PAY => "pay" })
        .transition(
            Transition::new(WAIT_PAY, PAY, [PAY_SUCCESS, PAY_FAIL], pay_action)
                .with_processor(processor.clone()),
        )
        .build();

    let state = machine.trigger(&Order { id: 42, paid: true }, PAY).unwrap();

    assert_eq!(state, PAY_SUCCESS);
    assert_eq!(
        processor.entries(),
        vec!["order 42 exit WaitPay on Pay", "order 42 enter PaySuccess"]
    );
}

#[test]
fn refused_payment_can_be_retried() {
    let processor = OrderEventProcessor::default();
    let mut machine = StateMachine::builder("orders")
        .states(labels! { WAIT_PAY => "awaiting payment", PAYING => "paying" })
        .events(labels! { PAY => "pay" })
        .transition(
            Transition::new(
                WAIT_PAY,
                PAY,
                [PAYING],
                |order: &Order, _: &State, _: &Event, to: &[State]| {
                    if order.paid {
                        Ok(to[0].clone())
                    } else {
                        Err(ActionError::refused(format!("order {} has no funds", order.id)))
                    }
                },
            )
            .with_processor(processor.clone()),
        )
        .build();

    let result = machine.trigger(&Order { id: 5, paid: false }, PAY);
    match result {
        Err(TriggerError::ActionFailed { source, .. }) => {
            assert_eq!(source.to_string(), "order 5 has no funds");
        }
        other => panic!("Expected ActionFailed, got {other:?}"),
    }
    assert_eq!(machine.current_state().unwrap(), WAIT_PAY);

    let state = machine.trigger(&Order { id: 5, paid: true }, PAY).unwrap();
    assert_eq!(state, PAYING);
    assert_eq!(
        processor.entries(),
        vec![
            "order 5 exit WaitPay on Pay",
            "order 5 failed WaitPay --Pay--> 1 (true)",
            "order 5 exit WaitPay on Pay",
            "order 5 enter Paying",
        ]
    );
}

#[test]
fn incremental_declarations_extend_candidates_only() {
    let machine: StateMachine<Order> = StateMachineBuilder::new("orders")
        .transition(Transition::new(WAIT_PAY, PAY, [PAY_SUCCESS, ""], pay_action))
        .transition(
            Transition::new(WAIT_PAY, PAY, [PAY_FAIL, PAY_SUCCESS], first_candidate)
                .with_processor(OrderEventProcessor::default()),
        )
        .build();

    let transition = machine.transition(WAIT_PAY, PAY).unwrap();
    assert_eq!(transition.targets, vec![PAY_FAIL, PAY_SUCCESS]);
    assert!(transition.processor.is_none());

    let chosen = (transition.action)(
        &Order { id: 9, paid: true },
        &transition.source,
        &transition.event,
        &transition.targets,
    );
    assert_eq!(chosen.unwrap(), PAY_SUCCESS);
}

#[tokio::test]
async fn each_order_owns_its_machine() {
    fn order_machine() -> StateMachine<Order> {
        StateMachine::builder("orders")
            .states(labels! {
                WAIT_PAY => "awaiting payment",
                PAY_SUCCESS => "paid",
                PAY_FAIL => "payment failed",
            })
            .events(labels! { PAY => "pay" })
            .transition(Transition::new(WAIT_PAY, PAY, [PAY_SUCCESS, PAY_FAIL], pay_action))
            .build()
    }

    let handles: Vec<_> = (0..4u64)
        .map(|id| {
            let mut machine = order_machine();
            tokio::spawn(async move {
                let order = Order {
                    id,
                    paid: id % 2 == 0,
                };
                machine.trigger(&order, PAY).map_err(|e| e.to_string())
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(results, vec![PAY_SUCCESS, PAY_FAIL, PAY_SUCCESS, PAY_FAIL]);
}
