use crate::error::Result;
use crate::raw::Geometry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{Read, Write};

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";

fn feature_type() -> String {
    FEATURE.to_string()
}

/// Top-level GeoJSON object
///
/// The fields of all three supported shapes (`FeatureCollection`, `Feature`
/// and a bare geometry) are merged into one struct; which ones are set
/// depends on `object_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub coordinates: Value,
}

impl Document {
    /// Parse a document from JSON text
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Normalize the document to a list of features
    ///
    /// A single `Feature` becomes a one-element list, and any other object
    /// type is treated as a bare geometry wrapped in a feature without
    /// properties.
    pub fn into_features(self) -> Vec<Feature> {
        if self.object_type == FEATURE_COLLECTION {
            return self.features;
        }

        if self.object_type == FEATURE {
            return vec![Feature::new(self.geometry, self.properties)];
        }

        let geometry = Geometry {
            geometry_type: self.object_type,
            coordinates: self.coordinates,
        };
        vec![Feature::new(Some(geometry), None)]
    }

    /// Write a `FeatureCollection` containing `features`
    pub fn write_collection<W: Write>(
        writer: &mut W,
        features: &[Feature],
        pretty: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Collection<'a> {
            #[serde(rename = "type")]
            object_type: &'static str,
            features: &'a [Feature],
        }

        let collection = Collection {
            object_type: FEATURE_COLLECTION,
            features,
        };

        if pretty {
            serde_json::to_writer_pretty(writer, &collection)?;
        } else {
            serde_json::to_writer(writer, &collection)?;
        }
        Ok(())
    }
}

/// GeoJSON feature
///
/// `geometry` and `properties` are `None` when the member is `null` or
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub object_type: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>, properties: Option<Map<String, Value>>) -> Self {
        Self {
            object_type: feature_type(),
            geometry,
            properties,
        }
    }

    /// The `name` property, if it is a string
    pub fn name(&self) -> Option<&str> {
        self.properties.as_ref()?.get("name")?.as_str()
    }
}
