//! Per-feature and per-tag report pages.

use super::{FeatureRow, Page, PageContext, TagRow};
use crate::error::AppResult;
use crate::models::{Feature, TagObject};

/// Every scenario and step of one feature.
pub struct FeatureReportPage<'a> {
    feature: &'a Feature,
}

impl<'a> FeatureReportPage<'a> {
    pub fn new(feature: &'a Feature) -> Self {
        FeatureReportPage { feature }
    }
}

impl Page for FeatureReportPage<'_> {
    fn web_page(&self) -> String {
        self.feature.report_file_name.clone()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        context.put_serialized("feature", self.feature)?;
        context.put_serialized("feature_summary", &FeatureRow::from(self.feature))?;
        Ok(())
    }
}

/// Every scenario carrying one tag.
pub struct TagReportPage<'a> {
    tag: &'a TagObject,
}

impl<'a> TagReportPage<'a> {
    pub fn new(tag: &'a TagObject) -> Self {
        TagReportPage { tag }
    }
}

impl Page for TagReportPage<'_> {
    fn web_page(&self) -> String {
        self.tag.report_file_name()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        context.put_serialized("tag", self.tag)?;
        context.put_serialized("tag_summary", &TagRow::from(self.tag))?;
        Ok(())
    }
}
