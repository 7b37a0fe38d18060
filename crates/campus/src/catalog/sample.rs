//! The fixed demonstration dataset.
//!
//! Dates are relative to the moment of seeding so the news feed and job
//! board always look current.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Activity, Career, NewsArticle, Program, School, Teacher};

/// Name recorded in the seed marker table for this dataset.
pub const SAMPLE_DATASET: &str = "sample-v1";

/// Every sample record, grouped by entity.
#[derive(Debug, Clone)]
pub struct SampleDataset {
    pub schools: Vec<School>,
    pub teachers: Vec<Teacher>,
    pub programs: Vec<Program>,
    pub activities: Vec<Activity>,
    pub news: Vec<NewsArticle>,
    pub careers: Vec<Career>,
}

impl SampleDataset {
    /// Builds the dataset with dates counted back from `now`.
    pub fn build(now: DateTime<Utc>) -> Self {
        Self {
            schools: schools(),
            teachers: teachers(),
            programs: programs(),
            activities: activities(),
            news: news(now),
            careers: careers(now),
        }
    }

    pub fn len(&self) -> usize {
        self.schools.len()
            + self.teachers.len()
            + self.programs.len()
            + self.activities.len()
            + self.news.len()
            + self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

fn schools() -> Vec<School> {
    vec![
        School {
            name: s("Binnazhara School"),
            address: s("123 Education Street, City Center"),
            phone: s("+1 (555) 111-2222"),
            email: s("info@binnazhara.edu"),
            description: s("Binnazhara School provides excellence in education with state-of-the-art facilities and experienced faculty. We focus on holistic development of students through academic excellence and extracurricular activities."),
            logo_image: None,
            established_year: 2005,
        },
        School {
            name: s("Al Noor School"),
            address: s("456 Knowledge Avenue, East District"),
            phone: s("+1 (555) 333-4444"),
            email: s("contact@alnoor.edu"),
            description: s("Al Noor School is dedicated to nurturing young minds through innovative teaching methods and comprehensive curriculum. We emphasize both traditional values and modern education."),
            logo_image: None,
            established_year: 2010,
        },
        School {
            name: s("International School"),
            address: s("789 Global Plaza, West Zone"),
            phone: s("+1 (555) 555-6666"),
            email: s("admissions@international.edu"),
            description: s("International School offers world-class education following international curriculum standards. Our diverse community prepares students for global citizenship."),
            logo_image: None,
            established_year: 2015,
        },
    ]
}

fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            name: s("Dr. Sarah Johnson"),
            subject: s("Mathematics"),
            qualification: s("PhD in Mathematics Education"),
            experience_years: 15,
            bio: s("Dr. Johnson has dedicated her career to making mathematics accessible and engaging for students of all levels. She specializes in innovative teaching methods."),
            email: s("s.johnson@school.edu"),
            phone: s("+1 (555) 111-1111"),
            profile_image: None,
        },
        Teacher {
            name: s("Prof. Ahmed Khan"),
            subject: s("Science"),
            qualification: s("MSc in Physics"),
            experience_years: 12,
            bio: s("Professor Khan brings his passion for science to the classroom, inspiring students to explore the wonders of the natural world through hands-on experiments."),
            email: s("a.khan@school.edu"),
            phone: s("+1 (555) 222-2222"),
            profile_image: None,
        },
        Teacher {
            name: s("Ms. Maria Garcia"),
            subject: s("English Literature"),
            qualification: s("MA in English"),
            experience_years: 10,
            bio: s("Ms. Garcia loves helping students discover the joy of reading and writing. She creates an engaging environment where creativity flourishes."),
            email: s("m.garcia@school.edu"),
            phone: s("+1 (555) 333-3333"),
            profile_image: None,
        },
        Teacher {
            name: s("Mr. David Lee"),
            subject: s("Computer Science"),
            qualification: s("MS in Computer Science"),
            experience_years: 8,
            bio: s("Mr. Lee is passionate about preparing students for the digital age. He teaches programming, web development, and emerging technologies."),
            email: s("d.lee@school.edu"),
            phone: s("+1 (555) 444-4444"),
            profile_image: None,
        },
    ]
}

fn programs() -> Vec<Program> {
    vec![
        Program {
            name: s("Primary Education"),
            description: s("Comprehensive primary education focusing on foundational skills in reading, writing, mathematics, and social development."),
            duration: s("6 Years"),
            age_group: s("Ages 6-12"),
            fee: 5000.0,
            curriculum: s("National Curriculum"),
            image: None,
        },
        Program {
            name: s("Secondary Education"),
            description: s("Advanced secondary education preparing students for higher education with focus on critical thinking and academic excellence."),
            duration: s("4 Years"),
            age_group: s("Ages 13-16"),
            fee: 7000.0,
            curriculum: s("International Baccalaureate"),
            image: None,
        },
        Program {
            name: s("STEM Program"),
            description: s("Specialized program in Science, Technology, Engineering, and Mathematics with hands-on learning and project-based curriculum."),
            duration: s("2 Years"),
            age_group: s("Ages 14-18"),
            fee: 8500.0,
            curriculum: s("Advanced STEM Curriculum"),
            image: None,
        },
        Program {
            name: s("Arts & Humanities"),
            description: s("Comprehensive arts education including visual arts, music, drama, and literature with focus on creative expression."),
            duration: s("2 Years"),
            age_group: s("Ages 14-18"),
            fee: 6500.0,
            curriculum: s("Arts & Humanities Curriculum"),
            image: None,
        },
    ]
}

fn activities() -> Vec<Activity> {
    vec![
        Activity {
            title: s("Football Training"),
            description: s("Professional football training for students of all skill levels. Develop teamwork, fitness, and sportsmanship."),
            category: s("Sports"),
            schedule: s("Mon, Wed, Fri 4:00-6:00 PM"),
            location: s("School Sports Ground"),
            images: Vec::new(),
        },
        Activity {
            title: s("Art Club"),
            description: s("Explore various art forms including painting, sketching, and sculpture. Express your creativity and learn from experienced artists."),
            category: s("Arts"),
            schedule: s("Tue, Thu 3:30-5:30 PM"),
            location: s("Art Studio, Building A"),
            images: Vec::new(),
        },
        Activity {
            title: s("Science Fair"),
            description: s("Annual science fair where students showcase innovative projects and experiments. Compete for prizes and recognition."),
            category: s("Academic"),
            schedule: s("March 15-17, All Day"),
            location: s("Main Auditorium"),
            images: Vec::new(),
        },
        Activity {
            title: s("Cultural Festival"),
            description: s("Celebrate diversity through music, dance, and traditional performances from various cultures."),
            category: s("Cultural"),
            schedule: s("Every Semester"),
            location: s("School Campus"),
            images: Vec::new(),
        },
    ]
}

fn news(now: DateTime<Utc>) -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            title: s("School Wins National Science Competition"),
            content: s("Our students brought home the first prize in the National Science Competition held last week. The team's innovative project on renewable energy impressed the judges and demonstrated excellence in scientific research. This achievement reflects the dedication of our students and the quality of our science program."),
            author: s("Admin Team"),
            published_at: now - Duration::days(7),
            category: s("Academic"),
            images: Vec::new(),
        },
        NewsArticle {
            title: s("New Sports Facilities Inaugurated"),
            content: s("We are excited to announce the opening of our new state-of-the-art sports facilities, including an Olympic-size swimming pool, indoor basketball court, and modern gymnasium. These facilities will provide our students with world-class training opportunities."),
            author: s("Sports Department"),
            published_at: now - Duration::days(3),
            category: s("Sports"),
            images: Vec::new(),
        },
        NewsArticle {
            title: s("Annual Day Celebration 2025"),
            content: s("Join us for our Annual Day celebration featuring performances by students, awards ceremony, and cultural programs. The event will showcase the talents and achievements of our students throughout the year. Parents and guests are warmly invited."),
            author: s("Events Committee"),
            published_at: now - Duration::days(1),
            category: s("Events"),
            images: Vec::new(),
        },
    ]
}

fn careers(now: DateTime<Utc>) -> Vec<Career> {
    vec![
        Career {
            job_title: s("Mathematics Teacher"),
            department: s("Academic"),
            location: s("Binnazhara School"),
            job_type: s("Full-time"),
            description: s("We are looking for an experienced Mathematics teacher to join our academic team. The ideal candidate will have a passion for teaching and ability to inspire students."),
            requirements: vec![
                s("Bachelor's degree in Mathematics or Education"),
                s("Minimum 3 years teaching experience"),
                s("Strong communication skills"),
                s("Ability to use technology in teaching"),
            ],
            salary: s("$45,000 - $60,000"),
            posted_at: now - Duration::days(14),
            is_active: true,
        },
        Career {
            job_title: s("School Administrator"),
            department: s("Administration"),
            location: s("Al Noor School"),
            job_type: s("Full-time"),
            description: s("Seeking a dedicated school administrator to manage daily operations, coordinate with staff, and ensure smooth functioning of school activities."),
            requirements: vec![
                s("Master's degree in Education Administration"),
                s("5+ years in school management"),
                s("Leadership and organizational skills"),
                s("Experience with school management systems"),
            ],
            salary: s("$55,000 - $75,000"),
            posted_at: now - Duration::days(10),
            is_active: true,
        },
        Career {
            job_title: s("Sports Coach"),
            department: s("Physical Education"),
            location: s("International School"),
            job_type: s("Part-time"),
            description: s("Part-time sports coach needed for afternoon training sessions. Focus on football and athletics training for middle and high school students."),
            requirements: vec![
                s("Coaching certification"),
                s("Experience with youth sports"),
                s("First aid certified"),
                s("Excellent interpersonal skills"),
            ],
            salary: s("$25,000 - $35,000"),
            posted_at: now - Duration::days(5),
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    #[test]
    fn test_dataset_sizes() {
        let data = SampleDataset::build(Utc::now());
        assert_eq!(data.schools.len(), 3);
        assert_eq!(data.teachers.len(), 4);
        assert_eq!(data.programs.len(), 4);
        assert_eq!(data.activities.len(), 4);
        assert_eq!(data.news.len(), 3);
        assert_eq!(data.careers.len(), 3);
        assert_eq!(data.len(), 21);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_every_sample_record_is_valid() {
        let data = SampleDataset::build(Utc::now());
        data.schools.iter().try_for_each(Entity::validate).unwrap();
        data.teachers.iter().try_for_each(Entity::validate).unwrap();
        data.programs.iter().try_for_each(Entity::validate).unwrap();
        data.activities.iter().try_for_each(Entity::validate).unwrap();
        data.news.iter().try_for_each(Entity::validate).unwrap();
        data.careers.iter().try_for_each(Entity::validate).unwrap();
    }

    #[test]
    fn test_dates_count_back_from_now() {
        let now = Utc::now();
        let data = SampleDataset::build(now);
        assert_eq!(data.news[0].published_at, now - Duration::days(7));
        assert_eq!(data.careers[0].posted_at, now - Duration::days(14));
        assert!(data.news.iter().all(|n| n.published_at < now));
    }
}
