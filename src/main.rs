use std::io;

use photoflow::menu::Menu;
use photoflow::App;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Cargar .env si existe antes de leer la configuración
    photo_core::config::init_dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // El puente tracing-log reenvía los registros de `log` de los crates.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    println!("   Photo Gallery App - capture pipeline simulator\n");
    let mut app = App::new(photo_core::CONFIG.clone());
    let stdin = io::stdin();
    Menu::new(&mut app, stdin.lock(), io::stdout()).run()
}
