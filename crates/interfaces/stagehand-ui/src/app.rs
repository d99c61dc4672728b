use std::time::Duration;

use crate::components::header;
use crate::screens::{analyzer, home, login, signup, transformer};
use eframe::egui;

use stagehand_app_core::{Route, StudioApplication};
use stagehand_core::{Credentials, SignupRequest};

/// Form state that lives only in the view. Anything that affects a
/// submission is pushed into the application core.
#[derive(Default)]
struct Forms {
    login: Credentials,
    signup: SignupRequest,
    clip: analyzer::ClipForm,
    file_error: Option<String>,
}

pub struct StagehandUiApp {
    core: StudioApplication,
    forms: Forms,
    last_route: Route,
}

impl StagehandUiApp {
    pub fn new(core: StudioApplication) -> Self {
        let last_route = core.state.route;
        Self {
            core,
            forms: Forms::default(),
            last_route,
        }
    }

    fn on_route_change(&mut self) {
        let route = self.core.state.route;
        if route == self.last_route {
            return;
        }
        match self.last_route {
            Route::Login | Route::Signup => {
                self.forms.login = Credentials::default();
                self.forms.signup = SignupRequest::default();
            }
            Route::ScriptTransformer | Route::VideoAnalyzer => {
                self.forms.clip = analyzer::ClipForm::default();
                self.forms.file_error = None;
            }
            Route::Home => {}
        }
        self.last_route = route;
    }
}

impl eframe::App for StagehandUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_events();
        self.on_route_change();

        egui::TopBottomPanel::top("header")
            .exact_height(36.0)
            .show(ctx, |ui| {
                let user = self.core.session().map(|s| s.user.display_name().to_string());
                let resp = header::draw(
                    ui,
                    self.core.state.route,
                    user.as_deref(),
                    self.core.is_busy(),
                );
                if resp.logout_clicked {
                    self.core.logout();
                } else if let Some(route) = resp.navigate {
                    self.core.navigate(route);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.core.state.route {
            Route::Login => login::draw(ui, &mut self.core, &mut self.forms.login),
            Route::Signup => signup::draw(ui, &mut self.core, &mut self.forms.signup),
            Route::Home => home::draw(ui, &mut self.core),
            Route::ScriptTransformer => {
                transformer::draw(ui, &mut self.core, &mut self.forms.file_error)
            }
            Route::VideoAnalyzer => analyzer::draw(
                ui,
                &mut self.core,
                &mut self.forms.clip,
                &mut self.forms.file_error,
            ),
        });

        // Results arrive on a background runtime; keep polling while one is due.
        if self.core.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
