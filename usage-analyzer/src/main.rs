use anyhow::Context;
use fuzzy_classifier::{analyze, config::Config};
use log::{debug, error, info};
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use std::{error::Error, sync::Arc};
use syslog::{Facility, Formatter3164};
use tokio::{sync::Mutex, task, time::Duration};
use tokio_cron_scheduler::{Job, JobScheduler};
use usage_monitor_lib::{
    appliance::{dto::UsageRequest, topics::USAGE_REQUEST_TOPIC},
    fuzzy::topics::{FUZZY_REPORT_TOPIC, FUZZY_SUMMARY_TOPIC},
};

mod convert;
mod history;

use history::UsageHistory;

const MQTT_CLIENT_NAME: &str = "usage_fuzzy_analyzer";
const MQTT_BROKER_ADDRESS: &str = "iotstore";
const MQTT_BROKER_PORT: u16 = 1883;
const SUMMARY_SCHEDULE: &str = "0 5 * * * *";

#[tokio::main()]
async fn main() -> Result<(), Box<dyn Error>> {
    let formatter = Formatter3164 {
        facility: Facility::LOG_DAEMON,
        hostname: None,
        process: "emfuzzyd".into(),
        pid: 0,
    };

    env_logger::init();
    if let Err(e) = syslog::unix(formatter) {
        error!("Failed to initialize syslog: {:?}", e);
    }

    println!(
        "Starting Usage Fuzzy Analyzer (emfuzzyd) v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Fail early on a malformed tariff setting
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config. Check PRICE_PER_KWH and USAGE_HISTORY_DAYS: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Tariff {} per kWh, summary window {} days",
        config.price_per_kwh, config.history_days
    );

    let history = Arc::new(Mutex::new(UsageHistory::new(config.history_days)));

    let mut mqttoptions = MqttOptions::new(MQTT_CLIENT_NAME, MQTT_BROKER_ADDRESS, MQTT_BROKER_PORT);
    mqttoptions.set_keep_alive(Duration::from_secs(10));

    let (client, mut eventloop) = AsyncClient::new(mqttoptions, 10);
    client
        .subscribe(USAGE_REQUEST_TOPIC.name(), QoS::AtLeastOnce)
        .await?;

    let sched = JobScheduler::new().await?;

    let summary_client = client.clone();
    let summary_history = history.clone();
    let mut summary_job = Job::new_async(SUMMARY_SCHEDULE, move |_, _| {
        let publish_client = summary_client.clone();
        let history = summary_history.clone();
        Box::pin(async move {
            if let Err(e) = publish_summary(&publish_client, &history).await {
                error!("Failed usage summary job: {:?}", e);
            }
        })
    })?;

    summary_job
        .on_stop_notification_add(
            &sched,
            Box::new(|job_id, notification_id, type_of_notification| {
                Box::pin(async move {
                    info!(
                        "Job {:?} was completed, notification {:?} ran ({:?})",
                        job_id, notification_id, type_of_notification
                    );
                })
            }),
        )
        .await?;

    sched.add(summary_job).await?;
    sched.start().await?;

    let handle = task::spawn(async move {
        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::Publish(publish)))
                    if USAGE_REQUEST_TOPIC.matches(&publish.topic) =>
                {
                    if let Err(e) =
                        handle_request(&client, &config, &history, &publish.payload).await
                    {
                        error!("Failed to evaluate usage request: {:?}", e);
                    }
                }
                Ok(notification) => debug!("Received = {:?}", notification),
                Err(e) => {
                    // Losing the broker ends the task and with it the program
                    error!("Error MQTT Event loop returned: {:?}", e);
                    break;
                }
            }
        }
    });

    if let Err(e) = handle.await {
        error!("Task panicked: {:?}", e);
    }
    std::process::exit(1);
}

async fn handle_request(
    client: &AsyncClient,
    config: &Config,
    history: &Mutex<UsageHistory>,
    payload: &[u8],
) -> Result<(), anyhow::Error> {
    let request: UsageRequest = USAGE_REQUEST_TOPIC
        .decode(payload)
        .context("Failed to decode usage request")?;
    let date = request
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let analysis = analyze(config, &convert::appliances(&request))
        .with_context(|| format!("Failed to analyze usage of {date}"))?;

    info!(
        "Usage {date}: {:.3} kWh -> {} (score {})",
        analysis.breakdown.total_kwh, analysis.evaluation.category, analysis.evaluation.score
    );

    {
        let mut history = history.lock().await;
        history.record(convert::daily_record(date, &analysis));
        debug!("{} days in usage history", history.records().len());
    }

    let payload = FUZZY_REPORT_TOPIC
        .encode(&convert::report(date, &analysis))
        .context("Failed to encode usage report")?;
    client
        .publish(FUZZY_REPORT_TOPIC.name(), QoS::AtLeastOnce, false, payload)
        .await
        .context("Failed to publish usage report")
}

async fn publish_summary(
    client: &AsyncClient,
    history: &Mutex<UsageHistory>,
) -> Result<(), anyhow::Error> {
    let today = chrono::Local::now().date_naive();
    let summary = history.lock().await.summary(today);
    info!(
        "Summary: {} days tracked, {} kWh average per day",
        summary.days_tracked, summary.average_daily
    );

    let payload = FUZZY_SUMMARY_TOPIC
        .encode(&convert::summary(&summary))
        .context("Failed to encode usage summary")?;
    client
        .publish(FUZZY_SUMMARY_TOPIC.name(), QoS::AtLeastOnce, true, payload)
        .await
        .context("Failed to publish usage summary")
}
