//! Google Translate speech backend
//!
//! Speaks through the same batch RPC the translate web page uses. Every
//! token from [`tokenize`] becomes one request; the MP3 fragments that come
//! back are concatenated in order.

use super::tokenizer::tokenize;
use super::{Language, Synthesizer};
use crate::config::Config;
use crate::{Result, VocalizeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::REFERER;
use serde_json::{json, Value};
use std::time::Duration;

/// RPC identifier of the translate speech call
const RPC_ID: &str = "jQ1olc";

static AUDIO_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).unwrap());

/// Speech synthesizer backed by translate.google.<tld>
pub struct GoogleTts {
    client: Client,
    endpoint: String,
    slow: bool,
}

impl GoogleTts {
    pub fn new(tld: &str, slow: bool, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::with_client(client, endpoint_for(tld), slow))
    }

    /// Use a prepared client against any batch RPC endpoint
    pub fn with_client(client: Client, endpoint: String, slow: bool) -> Self {
        Self {
            client,
            endpoint,
            slow,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.tld(),
            config.slow(),
            config.timeout(),
            &config.user_agent(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Speak a single token, returning its MP3 bytes
    fn request_token(&self, token: &str, language: Language) -> Result<Vec<u8>> {
        let payload = package_rpc(token, language.code(), self.slow)?;

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(REFERER, "http://translate.google.com/")
            .form(&[("f.req", payload)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(VocalizeError::Speech(format!(
                "speech service returned {} for language '{}'",
                status,
                language.code()
            )));
        }

        parse_audio(&response.text()?)
    }
}

impl Synthesizer for GoogleTts {
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(VocalizeError::Speech("no text to send to the speech service".into()));
        }

        let mut audio = Vec::new();
        for (idx, token) in tokens.iter().enumerate() {
            debug!("Speech token {}/{}: {} chars", idx + 1, tokens.len(), token.chars().count());
            audio.extend(self.request_token(token, language)?);
        }
        Ok(audio)
    }
}

fn endpoint_for(tld: &str) -> String {
    format!(
        "https://translate.google.{}/_/TranslateWebserverUi/data/batchexecute",
        tld
    )
}

/// Build the `f.req` form value for one token
///
/// The RPC argument is itself a JSON document embedded as a string.
/// Speed is `null` for the normal rate and `true` for slow speech.
pub fn package_rpc(text: &str, lang: &str, slow: bool) -> Result<String> {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameter = serde_json::to_string(&json!([text, lang, speed, "null"]))?;
    let rpc = json!([[[RPC_ID, parameter, Value::Null, "generic"]]]);
    Ok(serde_json::to_string(&rpc)?)
}

/// Pull the base64 MP3 out of a batch RPC response
pub fn parse_audio(body: &str) -> Result<Vec<u8>> {
    let mut audio = Vec::new();

    for line in body.lines().filter(|line| line.contains(RPC_ID)) {
        let caps = AUDIO_PAYLOAD.captures(line).ok_or_else(|| {
            VocalizeError::Speech("speech service response carried no audio".into())
        })?;
        audio.extend(STANDARD.decode(&caps[1])?);
    }

    if audio.is_empty() {
        return Err(VocalizeError::Speech("speech service returned no audio".into()));
    }
    Ok(audio)
}
