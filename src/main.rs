//! Pokemon catalog browser TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{
    filter_bar_area, Component, DetailOverlay, DetailOverlayProps, DexDisplay, DexDisplayProps,
    FilterBar, FilterBarProps,
};
use pokedex::effect::Effect;
use pokedex::reducer::reducer;
use pokedex::state::{AppState, TITLE_TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokemon catalog from PokeAPI")]
struct Args {
    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DexComponentId {
    Display,
    Search,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DexContext {
    Main,
    Search,
    Detail,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        if self.detail_name.is_some() {
            return Some(DexComponentId::Detail);
        }
        if self.search.active {
            return Some(DexComponentId::Search);
        }
        Some(DexComponentId::Display)
    }

    fn modal(&self) -> Option<DexComponentId> {
        if self.detail_name.is_some() {
            Some(DexComponentId::Detail)
        } else if self.search.active {
            Some(DexComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: DexComponentId) -> DexContext {
        match id {
            DexComponentId::Display => DexContext::Main,
            DexComponentId::Search => DexContext::Search,
            DexComponentId::Detail => DexContext::Detail,
        }
    }

    fn default_context(&self) -> DexContext {
        DexContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let debug = DebugSession::new(args.debug);

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

struct DexUi {
    display: DexDisplay,
    filter: FilterBar,
    detail: DetailOverlay,
}

impl DexUi {
    fn new() -> Self {
        Self {
            display: DexDisplay,
            filter: FilterBar,
            detail: DetailOverlay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        event_ctx.set_component_area(DexComponentId::Display, area);

        let props = DexDisplayProps {
            state,
            is_focused: render_ctx.is_focused()
                && !state.search.active
                && state.detail_name.is_none(),
        };
        self.display.render(frame, area, props);

        if state.search.active {
            event_ctx.set_component_area(DexComponentId::Search, filter_bar_area(area));
        } else {
            event_ctx.component_areas.remove(&DexComponentId::Search);
        }

        if state.detail_name.is_some() {
            let modal_area = centered_rect(48, 18, area);
            event_ctx.set_component_area(DexComponentId::Detail, modal_area);
            self.detail.render(
                frame,
                area,
                DetailOverlayProps {
                    entry: state.detail_entry(),
                    is_focused: render_ctx.is_focused(),
                },
            );
        } else {
            event_ctx.component_areas.remove(&DexComponentId::Detail);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DexDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.display.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions: Vec<_> = self
            .filter
            .handle_event(event, FilterBarProps { state })
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }

    fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions: Vec<_> = self
            .detail
            .handle_event(
                event,
                DetailOverlayProps {
                    entry: state.detail_entry(),
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(DexComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(DexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(DexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "title",
                    Duration::from_millis(TITLE_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadPage { offset } => {
            let key = format!("page_{offset}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_page(offset).await {
                    Ok(batch) => Action::PageDidLoad(batch),
                    Err(error) => Action::PageDidError(error),
                }
            });
        }
        Effect::LoadTypes => {
            ctx.tasks().spawn(TaskKey::new("types"), async {
                match api::fetch_type_list().await {
                    Ok(types) => Action::TypesDidLoad(types),
                    Err(error) => Action::TypesDidError(error),
                }
            });
        }
    }
}
