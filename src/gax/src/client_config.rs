// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Configure a client.
///
/// A client represents a connection to an AWS service. The default
/// configuration targets the public endpoint in the region named by the
/// `AWS_REGION` environment variable. Applications may override the region,
/// the endpoint (e.g. to use a VPC endpoint or a local emulator), or enable
/// tracing.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub(crate) endpoint: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) tracing: bool,
}

const LOGGING_VAR: &str = "AWS_SDK_RUST_LOGGING";
const REGION_VAR: &str = "AWS_REGION";
const DEFAULT_REGION: &str = "us-east-1";

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Sets an endpoint that overrides the default endpoint for a service.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the region, overriding the `AWS_REGION` environment variable.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// The effective region.
    pub fn region(&self) -> String {
        if let Some(r) = &self.region {
            return r.clone();
        }
        std::env::var(REGION_VAR)
            .ok()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// The effective endpoint for `service`, e.g. `comprehend`.
    pub fn endpoint(&self, service: &str) -> String {
        if let Some(e) = &self.endpoint {
            return e.clone();
        }
        format!("https://{service}.{}.amazonaws.com", self.region())
    }
}
