//! Raw form input for creating catalog records.
//!
//! Form fields arrive as text. Numeric fields that are left blank take the
//! application's defaults; anything else that does not parse is rejected
//! instead of being silently replaced.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{Activity, Career, Entity, NewsArticle, Program, School, Teacher};

const DEFAULT_ESTABLISHED_YEAR: i32 = 2000;

fn parse_or<T: FromStr>(
    field: &'static str,
    raw: &str,
    default: T,
) -> Result<T, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Splits a multi-line text box into one requirement per non-blank line.
pub fn parse_requirements(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub established_year: String,
}

impl SchoolForm {
    pub fn into_school(self) -> Result<School, ValidationError> {
        let school = School {
            established_year: parse_or(
                "established_year",
                &self.established_year,
                DEFAULT_ESTABLISHED_YEAR,
            )?,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            description: self.description,
            logo_image: None,
        };
        school.validate()?;
        Ok(school)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherForm {
    pub name: String,
    pub subject: String,
    pub qualification: String,
    pub experience: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
}

impl TeacherForm {
    pub fn into_teacher(self) -> Result<Teacher, ValidationError> {
        let teacher = Teacher {
            experience_years: parse_or("experience", &self.experience, 0)?,
            name: self.name,
            subject: self.subject,
            qualification: self.qualification,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            profile_image: None,
        };
        teacher.validate()?;
        Ok(teacher)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramForm {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub age_group: String,
    pub fee: String,
    pub curriculum: String,
}

impl ProgramForm {
    pub fn into_program(self) -> Result<Program, ValidationError> {
        let program = Program {
            fee: parse_or("fee", &self.fee, 0.0)?,
            name: self.name,
            description: self.description,
            duration: self.duration,
            age_group: self.age_group,
            curriculum: self.curriculum,
            image: None,
        };
        program.validate()?;
        Ok(program)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub schedule: String,
    pub location: String,
}

impl ActivityForm {
    pub fn into_activity(self) -> Result<Activity, ValidationError> {
        let activity = Activity {
            title: self.title,
            description: self.description,
            category: self.category,
            schedule: self.schedule,
            location: self.location,
            images: Vec::new(),
        };
        activity.validate()?;
        Ok(activity)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    /// Defaults to the submission time.
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsForm {
    pub fn into_article(self, now: DateTime<Utc>) -> Result<NewsArticle, ValidationError> {
        let article = NewsArticle {
            title: self.title,
            content: self.content,
            author: self.author,
            published_at: self.published_at.unwrap_or(now),
            category: self.category,
            images: Vec::new(),
        };
        article.validate()?;
        Ok(article)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerForm {
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    pub salary: String,
}

impl CareerForm {
    /// Builds an active opening posted at `now`.
    pub fn into_career(self, now: DateTime<Utc>) -> Result<Career, ValidationError> {
        let career = Career {
            requirements: parse_requirements(&self.requirements),
            job_title: self.job_title,
            department: self.department,
            location: self.location,
            job_type: self.job_type,
            description: self.description,
            salary: self.salary,
            posted_at: now,
            is_active: true,
        };
        career.validate()?;
        Ok(career)
    }
}
