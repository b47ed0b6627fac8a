use crate::config;
use crate::events::AppEvent;
use crate::gui::indicator::{self, IndicatorState};
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct AppModel {
    pub state: Rc<RefCell<IndicatorState>>,
    pub refresh_hold: Duration,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragUpdate(f64),
    DragEnd,
    Tick(i64),
    RefreshDone,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        IndicatorState,
        async_channel::Receiver<AppEvent>,
        Duration,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Gyre"),
            set_default_size: (360, 640),
            add_css_class: "gyre-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "gyre-drawing-area",

                // the stand-in for the scroll container's overscroll
                add_controller = gtk::GestureDrag {
                    connect_drag_update[sender] => move |_, _, offset_y| {
                        sender.input(AppMsg::DragUpdate(offset_y));
                    },
                    connect_drag_end[sender] => move |_, _, _| {
                        sender.input(AppMsg::DragEnd);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx, refresh_hold) = init;

        theme::load_css();

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            refresh_hold,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = indicator::draw(cr, &state_draw.borrow(), &colors, width, height) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // the frame clock drives crossfade, spinner, and snap-back
        let sender_tick = sender.clone();
        widgets.drawing_area.add_tick_callback(move |_, clock| {
            sender_tick.input(AppMsg::Tick(clock.frame_time()));
            glib::ControlFlow::Continue
        });

        let sender_events = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_events.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragUpdate(offset_y) => {
                let action = self.state.borrow_mut().drag_to(offset_y);
                if action.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::DragEnd => {
                let action = self.state.borrow_mut().release();
                if action.should_refresh {
                    // stand-in for the actual refresh operation
                    let hold = self.refresh_hold;
                    let sender = sender.clone();
                    relm4::spawn(async move {
                        tokio::time::sleep(hold).await;
                        sender.input(AppMsg::RefreshDone);
                    });
                }
                if action.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Tick(frame_time) => {
                if self.state.borrow_mut().tick(frame_time) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::RefreshDone => {
                self.state.borrow_mut().finish_refresh();
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.refresh_hold = Duration::from_millis(new_config.refresh_hold_ms);
                    self.state.borrow_mut().apply_config(&new_config);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
