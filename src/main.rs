use clap::Parser;
use snippet_lab::core::{calendar, catalog, dispatch, sequence, text};
use snippet_lab::utils::{logger, validation::Validate};
use snippet_lab::{
    Car, CliConfig, Day, Describe, Product, RatedRecord, SquareTask, TaskConfig, TaskRunner,
    Value, Vehicle,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting snippet-lab showcase");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Case formatter
    let formatted = text::format_string(&config.text, Some(config.uppercase));
    println!("format_string: {}", formatted);

    // Rating filter
    let records = vec![
        RatedRecord {
            title: "The Matrix".to_string(),
            rating: 4.5,
        },
        RatedRecord {
            title: "Gigli".to_string(),
            rating: 2.5,
        },
        RatedRecord {
            title: "Inception".to_string(),
            rating: 4.0,
        },
    ];
    let kept = catalog::filter_by_rating(&records);
    println!("filter_by_rating: {}", serde_json::to_string(&kept)?);

    // Maximum-by-price selection
    let products = vec![
        Product {
            name: "Keyboard".to_string(),
            price: 49.99,
        },
        Product {
            name: "Monitor".to_string(),
            price: 199.99,
        },
        Product {
            name: "Mouse".to_string(),
            price: 19.99,
        },
    ];
    match catalog::most_expensive(&products) {
        Some(best) => println!("most_expensive: {} at {}", best.name, best.price),
        None => println!("most_expensive: none"),
    }

    // Sequence concatenation
    let merged = sequence::concatenate(&[&[1, 2][..], &[3][..], &[][..]]);
    println!("concatenate: {:?}", merged);

    // Vehicle / Car
    let vehicle = Vehicle::new("Toyota", 2020);
    let car = Car::new("Honda", 2022, "Civic");
    println!("vehicle: {}", vehicle.info());
    println!("car: {} / {}", car.vehicle.info(), car.info());

    // Value-kind dispatch
    for value in [Value::Text("hello".to_string()), Value::Number(10.0)] {
        println!(
            "process_value({:?}) = {}",
            value,
            dispatch::process_value(&value)
        );
    }

    // Day classifier
    for day in Day::ALL {
        println!("{:?} is a {}", day, calendar::day_type(day));
    }

    // Delayed squaring task
    let task = SquareTask::with_delay(config.task_value(), config.task_delay());
    let runner = TaskRunner::new(task);
    match runner.run().await {
        Ok(square) => {
            tracing::info!("✅ Showcase completed");
            println!("square_async({}) = {}", config.value, square);
        }
        Err(e) => {
            tracing::error!("❌ Task failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
