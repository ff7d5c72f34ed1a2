use anyhow::Result;

use islandsun_product_scraper::{Config, Credentials, FatalError, Session, archiver, catalog, price};

fn main() {
    dotenv::dotenv().ok();

    if let Err(err) = run() {
        eprintln!("ERROR: {err:#}");
        let code = err
            .downcast_ref::<FatalError>()
            .map(FatalError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let credentials = Credentials::from_env()?;

    let session = Session::login(&config, &credentials)?;
    let entries = catalog::collect(&session, &config)?;
    let products = price::enrich(&session, &config, &entries)?;

    archiver::save_products(products, &config.output_dir)?;
    archiver::write_last_updated(chrono::Local::now().date_naive(), &config.output_dir)?;

    println!("[ALL DONE]");
    Ok(())
}
