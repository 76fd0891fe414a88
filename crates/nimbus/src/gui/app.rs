use crate::config;
use crate::events::AppEvent;
use crate::gui::cursor::{self, CursorMount};
use crate::gui::{theme, window};
use gtk::prelude::*;
use gtk4 as gtk;
use nimbus_engine::{CursorConfig, CursorEngine};
use relm4::prelude::*;
use std::path::PathBuf;

pub struct AppInit {
    pub config: CursorConfig,
    pub config_path: PathBuf,
    pub cursor_enabled: bool,
    pub rx: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub config_path: PathBuf,
    pub cursor_enabled: bool,
    pub mount: Option<CursorMount>,
    pub root: gtk::ApplicationWindow,
    pub overlay: gtk::Overlay,
    pub canvas: gtk::DrawingArea,
    pub extras: gtk::Box,
    pub extra_count: u32,
}

#[derive(Debug)]
pub enum AppMsg {
    AddClickable,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    // an invalid config leaves the current cursor in place
    fn remount(&mut self, config: CursorConfig) {
        let engine = match CursorEngine::new(config) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("Rejected cursor config: {}", e);
                return;
            }
        };

        if let Some(mut previous) = self.mount.take() {
            previous.teardown();
        }
        self.mount = Some(cursor::mount(
            engine,
            &self.root,
            &self.overlay,
            &self.canvas,
        ));
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            #[name = "overlay"]
            gtk::Overlay {
                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 12,
                    add_css_class: "nimbus-page",

                    gtk::Label {
                        set_label: "Nimbus cursor playground",
                        set_halign: gtk::Align::Start,
                        add_css_class: "title-2",
                    },

                    gtk::Label {
                        set_label: "Hover, press and click the controls below.",
                        set_halign: gtk::Align::Start,
                        set_wrap: true,
                    },

                    gtk::LinkButton::with_label("https://www.gtk.org", "Visit gtk.org") {
                        set_halign: gtk::Align::Start,
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 8,

                        #[name = "name_label"]
                        gtk::Label {
                            set_label: "_Name",
                            set_use_underline: true,
                        },

                        #[name = "name_entry"]
                        gtk::Entry {
                            set_hexpand: true,
                        },
                    },

                    gtk::DropDown::from_strings(&["Small", "Medium", "Large"]) {
                        set_halign: gtk::Align::Start,
                    },

                    gtk::CheckButton {
                        set_label: Some("Remember me"),
                    },

                    gtk::Label {
                        set_label: "This label is marked as a link",
                        set_halign: gtk::Align::Start,
                        add_css_class: "link",
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 8,

                        gtk::Button {
                            set_label: "Add a button",
                            connect_clicked => AppMsg::AddClickable,
                        },

                        gtk::Button {
                            set_label: "Submit",
                            add_css_class: "suggested-action",
                        },
                    },

                    #[name = "extras"]
                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 8,
                    },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            cursor_enabled,
            rx,
        } = init;

        theme::load_css();
        window::init_window(&root);

        let canvas = gtk::DrawingArea::default();
        canvas.set_can_target(false);
        canvas.add_css_class("nimbus-canvas");

        let model = AppModel {
            config_path,
            cursor_enabled,
            mount: None,
            root: root.clone(),
            overlay: gtk::Overlay::default(),
            canvas: canvas.clone(),
            extras: gtk::Box::default(),
            extra_count: 0,
        };

        let widgets = view_output!();

        let mut model = model;
        model.overlay = widgets.overlay.clone();
        model.extras = widgets.extras.clone();

        widgets.overlay.add_overlay(&canvas);
        widgets
            .name_label
            .set_mnemonic_widget(Some(&widgets.name_entry));

        if model.cursor_enabled {
            model.remount(config);
        } else {
            log::info!("No desktop pointer detected, keeping the native cursor");
        }

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::AddClickable => {
                self.extra_count += 1;
                let button = gtk::Button::with_label(&format!("Extra {}", self.extra_count));
                self.extras.append(&button);

                if let Some(mount) = self.mount.as_mut()
                    && cursor::register(mount, button.upcast_ref())
                {
                    log::debug!("Registered {} clickable elements", mount.bound_count());
                }
            }
            AppMsg::ConfigReload => {
                if !self.cursor_enabled {
                    return;
                }
                match config::load_config(&self.config_path) {
                    Ok(new_config) => {
                        self.remount(new_config);
                        log::info!("Configuration reloaded");
                    }
                    Err(e) => log::error!("Failed to reload config: {}", e),
                }
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if let Some(mut mount) = self.mount.take() {
            mount.teardown();
        }
    }
}
