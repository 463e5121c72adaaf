use iced::widget::{column, container, horizontal_rule, scrollable, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod media;
mod service;
mod state;
mod ui;

use config::Config;
use media::preview::{load_selected_file, IMAGE_EXTENSIONS};
use service::{HttpImageService, ImageService};
use state::effect;
use state::widget::{Effect, Event, UploadWidget};

/// Main application state
struct ImageUploader {
    /// Selection, gallery and status
    widget: UploadWidget,
    /// Backend the widget uploads to and lists from
    service: Arc<dyn ImageService>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Choose Image" button
    PickFile,
    /// Anything the upload widget handles itself
    Widget(Event),
}

impl ImageUploader {
    /// Create the application and start loading the gallery
    fn new(service: Arc<dyn ImageService>) -> (Self, Task<Message>) {
        let widget = UploadWidget::new();
        let mount = widget.mount();
        let app = ImageUploader { widget, service };
        let task = app.run(mount);
        (app, task)
    }

    /// Launch the background task for a widget effect
    fn run(&self, effect: Effect) -> Task<Message> {
        effect::perform(effect, self.service.clone()).map(Message::Widget)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => Task::perform(load_selected_file(path), |result| {
                        Message::Widget(Event::FileLoaded(result))
                    }),
                    None => Task::none(),
                }
            }
            Message::Widget(event) => match self.widget.update(event) {
                Some(effect) => self.run(effect),
                None => Task::none(),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Column<Message> = column![
            ui::uploader::view(&self.widget),
            horizontal_rule(1.0),
            ui::gallery::view(&self.widget),
        ]
        .spacing(32)
        .padding(40)
        .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let service: Arc<dyn ImageService> = match HttpImageService::new(config.service_url.clone()) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("❌ Could not create image service client: {}", e);
            std::process::exit(1);
        }
    };
    info!("🎨 Image Uploader using service at {}", config.service_url);

    iced::application("Image Uploader", ImageUploader::update, ImageUploader::view)
        .theme(ImageUploader::theme)
        .centered()
        .run_with(move || ImageUploader::new(service))
}
