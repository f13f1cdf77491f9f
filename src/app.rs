use eframe::egui;
use std::path::Path;

use lumaview::image_io::SUPPORTED_EXTENSIONS;
use lumaview::session::ViewerSession;
use lumaview::transform::TransformParams;

const ZOOM_STEP: f32 = 1.2;
const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.05..=50.0;

pub struct ViewerApp {
    session: ViewerSession,
    texture: Option<egui::TextureHandle>,
    zoom: f32,
    needs_upload: bool,
}

impl ViewerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        initial_path: Option<std::path::PathBuf>,
    ) -> Self {
        let mut app = Self {
            session: ViewerSession::new(),
            texture: None,
            zoom: 1.0,
            needs_upload: false,
        };
        if let Some(path) = initial_path {
            app.open(&path);
        }
        app
    }

    fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            self.open(&path);
        }
    }

    fn open(&mut self, path: &Path) {
        match self.session.open(path) {
            Ok(()) => {
                self.zoom = 1.0;
                self.needs_upload = true;
            }
            Err(e) => log::error!("{e}"),
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        if let Some(img) = self.session.display() {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [img.width, img.height],
                &img.to_rgba_bytes(),
            );
            self.texture =
                Some(ctx.load_texture("viewer", color_image, egui::TextureOptions::LINEAR));
        }
    }

    fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());
    }

    fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());
    }

    fn set_params(&mut self, params: TransformParams) {
        match self.session.set_params(params) {
            Ok(()) => self.needs_upload = true,
            Err(e) => log::warn!("transform parameters rejected: {e}"),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard zoom: + / = in, - out
        if ctx.input(|i| i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals)) {
            self.zoom_in();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Minus)) {
            self.zoom_out();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    self.open_dialog();
                }
                ui.separator();
                if ui.button("Zoom In").clicked() {
                    self.zoom_in();
                }
                if ui.button("Zoom Out").clicked() {
                    self.zoom_out();
                }
                if self.session.display().is_some() {
                    ui.separator();
                    ui.label(format!("{:.0}%", self.zoom * 100.0));
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.session.status());
        });

        egui::SidePanel::right("transform")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                let params = self.session.params();
                let mut a = params.a as i32;
                let mut b = params.b as i32;
                let mut gamma = params.gamma as i32;

                let mut changed = false;
                changed |= ui
                    .add(egui::Slider::new(&mut a, -10..=10).text("Factor a"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut b, -50..=50).text("Factor b"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut gamma, -5..=5).text("Factor gamma"))
                    .changed();

                if changed {
                    self.set_params(TransformParams {
                        a: a as f64,
                        b: b as f64,
                        gamma: gamma as f64,
                    });
                }
            });

        if self.needs_upload {
            self.upload_texture(ctx);
            self.needs_upload = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let (Some(tex), Some(img)) = (&self.texture, self.session.display()) {
                egui::ScrollArea::both().show(ui, |ui| {
                    let display_size = egui::vec2(
                        img.width as f32 * self.zoom,
                        img.height as f32 * self.zoom,
                    );
                    ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                });
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Open an image to begin");
                });
            }
        });
    }
}
