use helmet_rs::{
    Helmet, app,
    handler::{Request, Response},
    helmet::{CspDirective, CspSource, HelmetConfig, ReferrerPolicyDirective},
};
use log::{error, info, warn};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    const PORT: u16 = 8080;

    let helmet = match std::env::var("HELMET_CONFIG") {
        Ok(path) => match HelmetConfig::from_file(&path) {
            Ok(config) => {
                info!("Loaded helmet configuration from {}", path);
                Helmet::from_config(config)
            }
            Err(e) => {
                warn!("{}, falling back to the default helmet", e);
                default_helmet()
            }
        },
        Err(_) => default_helmet(),
    };
    helmet.prime();

    let mut app = app();

    app.use_with(helmet).handler(|_req: &mut Request, res: &mut Response| {
        res.r#type(hyper::header::HeaderValue::from_static("text/html; charset=utf-8"))
            .send("<h1>I love Helmet.js, this is the Rust equivalent</h1>");
        async {}
    });

    if let Err(e) = app
        .listen(PORT, || info!("Server listening on port {}", PORT))
        .await
    {
        error!("{}", e);
    }
}

fn default_helmet() -> Helmet {
    let mut helmet = Helmet::default();
    helmet
        .content_security_policy
        .add(CspDirective::DEFAULT_SRC, [CspSource::SELF])
        .add(CspDirective::OBJECT_SRC, [CspSource::NONE])
        .create(CspDirective::UPGRADE_INSECURE_REQUESTS);
    helmet.referrer_policy.push(ReferrerPolicyDirective::NO_REFERRER).push(
        ReferrerPolicyDirective::STRICT_ORIGIN_WHEN_CROSS_ORIGIN,
    );
    helmet
}
