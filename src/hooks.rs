use big_o_visualizer::params::{parse_c, parse_max_n, parse_n0};
use big_o_visualizer::{GrowthFn, ParamChange, ParamError, ParameterSet};
use log::warn;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Reducer state wrapping the parameter set; every action changes one field.
#[derive(Clone, PartialEq, Default)]
pub struct ParamStore {
    pub params: ParameterSet,
}

impl Reducible for ParamStore {
    type Action = ParamChange;

    fn reduce(self: Rc<Self>, action: ParamChange) -> Rc<Self> {
        let mut next = (*self).clone();
        next.params.apply(action);
        if next == *self {
            // Unchanged: keep the same Rc so nothing re-renders.
            self
        } else {
            Rc::new(next)
        }
    }
}

/// The current parameters and the callbacks each control binds to.
#[derive(Clone)]
pub struct ParamStoreHandle {
    pub params: ParameterSet,
    /// `oninput` of the f(n) text field. Any text is accepted.
    pub on_expr_input: Callback<InputEvent>,
    /// `onchange` of the g(n) selector.
    pub on_growth_change: Callback<Event>,
    pub on_c_input: Callback<InputEvent>,
    pub on_n0_input: Callback<InputEvent>,
    pub on_max_n_input: Callback<InputEvent>,
}

/// Build an `oninput` callback for a range slider. Values that fail to parse
/// are logged and dropped, leaving the stored value as it was.
fn slider_input(
    dispatcher: UseReducerDispatcher<ParamStore>,
    parse: fn(&str) -> Result<ParamChange, ParamError>,
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match parse(&input.value()) {
            Ok(change) => dispatcher.dispatch(change),
            Err(err) => warn!("Ignoring slider input: {}", err),
        }
    })
}

/// Custom hook owning the widget's parameter set for the lifetime of the component.
#[hook]
pub fn use_parameter_store() -> ParamStoreHandle {
    let store = use_reducer(ParamStore::default);
    let dispatcher = store.dispatcher();

    let on_expr_input = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ParamChange::FExpr(input.value()));
        })
    };

    let on_growth_change = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(ParamChange::Growth(GrowthFn::from_key(&select.value())));
        })
    };

    ParamStoreHandle {
        params: store.params.clone(),
        on_expr_input,
        on_growth_change,
        on_c_input: slider_input(dispatcher.clone(), parse_c),
        on_n0_input: slider_input(dispatcher.clone(), parse_n0),
        on_max_n_input: slider_input(dispatcher, parse_max_n),
    }
}
