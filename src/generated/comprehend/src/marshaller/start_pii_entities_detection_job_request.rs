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

use crate::marshaller::InputDataConfigJsonMarshaller;
use crate::marshaller::PiiOutputDataConfigJsonMarshaller;
use crate::model::StartPiiEntitiesDetectionJobRequest;
use gax::json::{JsonMarshaller, Marshalled};
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [StartPiiEntitiesDetectionJobRequest] records as JSON objects.
#[derive(Debug)]
pub struct StartPiiEntitiesDetectionJobRequestJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: StartPiiEntitiesDetectionJobRequestJsonMarshaller =
        StartPiiEntitiesDetectionJobRequestJsonMarshaller { _private: () };
}

impl StartPiiEntitiesDetectionJobRequestJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<StartPiiEntitiesDetectionJobRequest>
    for StartPiiEntitiesDetectionJobRequestJsonMarshaller
{
    fn marshall<S>(
        &self,
        record: &StartPiiEntitiesDetectionJobRequest,
        writer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.input_data_config {
            state.serialize_entry(
                "InputDataConfig",
                &Marshalled::new(InputDataConfigJsonMarshaller::get_instance(), v),
            )?;
        }
        if let Some(v) = &record.output_data_config {
            state.serialize_entry(
                "OutputDataConfig",
                &Marshalled::new(PiiOutputDataConfigJsonMarshaller::get_instance(), v),
            )?;
        }
        if let Some(v) = &record.mode {
            state.serialize_entry("Mode", v)?;
        }
        if let Some(v) = &record.data_access_role_arn {
            state.serialize_entry("DataAccessRoleArn", v)?;
        }
        if let Some(v) = &record.job_name {
            state.serialize_entry("JobName", v)?;
        }
        if let Some(v) = &record.language_code {
            state.serialize_entry("LanguageCode", v)?;
        }
        if let Some(v) = &record.client_request_token {
            state.serialize_entry("ClientRequestToken", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for StartPiiEntitiesDetectionJobRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        StartPiiEntitiesDetectionJobRequestJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
