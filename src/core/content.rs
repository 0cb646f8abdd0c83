//! Static portfolio content.

#[derive(Debug)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub score: &'static str,
}

#[derive(Debug)]
pub struct Work {
    pub role: &'static str,
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub github: Option<&'static str>,
    pub technologies: &'static [&'static str],
}

impl Project {
    /// At most three technology chips plus a `+N` overflow count.
    pub fn chips(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(3);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Certification,
    Course,
    Activity,
}

#[derive(Debug)]
pub struct Credential {
    pub title: &'static str,
    /// Issuer for certifications, description for activities.
    pub detail: Option<&'static str>,
    /// Year or period.
    pub when: &'static str,
    pub kind: CredentialKind,
}

#[derive(Debug)]
pub struct BlogPost {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug)]
pub struct Contact {
    pub email: &'static str,
    pub address: &'static str,
    pub socials: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub struct Content {
    pub owner: &'static str,
    pub monogram: &'static str,
    pub headline: &'static [&'static str],
    pub tagline: &'static str,
    pub about: &'static str,
    pub education: &'static [Education],
    pub work: &'static [Work],
    pub projects: &'static [Project],
    pub all_projects_url: &'static str,
    pub skills_intro: &'static str,
    pub skill_tags: &'static [&'static str],
    pub stats: &'static [Stat],
    pub tech: &'static [&'static str],
    pub credentials: &'static [Credential],
    pub blog: &'static [BlogPost],
    pub contact: Contact,
}

impl Content {
    pub fn certifications(&self) -> impl Iterator<Item = &Credential> {
        self.credentials
            .iter()
            .filter(|c| c.kind != CredentialKind::Activity)
    }

    pub fn activities(&self) -> impl Iterator<Item = &Credential> {
        self.credentials
            .iter()
            .filter(|c| c.kind == CredentialKind::Activity)
    }
}

pub static CONTENT: Content = Content {
    owner: "MD SHAOWN RAHMAN",
    monogram: "SJ.",
    headline: &["Data", "&", "Machine", "Learning", "Aspirant."],
    tagline: "Turning raw data into meaningful insights and building intelligent, real-world solutions.",
    about: "I'm passionate about turning raw data into meaningful insights and building \
            intelligent, real-world solutions using modern algorithms and automation.",
    education: &[
        Education {
            degree: "Bachelor of Science",
            field: "Computer Science & Engineering",
            institution: "Pundra University of Science & Technology, Bogura",
            period: "May 2018 – Dec 2022",
            score: "Final Grade: 3.40 / 4.00",
        },
        Education {
            degree: "Higher Secondary School Certificate",
            field: "Science",
            institution: "Government Azizul Haque College, Bogura",
            period: "2014 – 2016",
            score: "Final Grade: 5.00 / 5.00",
        },
        Education {
            degree: "Secondary School Certificate",
            field: "Science",
            institution: "SOS Hermann Gmeiner College, Bogura",
            period: "2012 – 2014",
            score: "Final Grade: 5.00 / 5.00",
        },
    ],
    work: &[
        Work {
            role: "Web Developer",
            period: "Nov 2023 – Dec 2024",
            responsibilities: &[
                "Developed responsive interfaces using HTML, CSS, and JavaScript.",
                "Integrated front-end applications with RESTful APIs.",
                "Collaborated with designers and backend developers.",
            ],
        },
        Work {
            role: "Web Developer Intern",
            period: "May 2023 – Oct 2023",
            responsibilities: &[
                "Assisted in UI development and bug fixing.",
                "Participated in Agile workflows and code reviews.",
                "Contributed to front-end feature development and testing.",
            ],
        },
    ],
    projects: &[
        Project {
            title: "VisionGuard",
            category: "Computer Vision • Object Detection",
            year: "2024",
            description: "Real-time object detection application using YOLOv8 and OpenCV, \
                          rebuilt with a modular architecture for inference, training, and evaluation.",
            github: Some("https://github.com/shaownXjony/visionguard"),
            technologies: &["Python", "YOLOv8", "OpenCV", "Deep Learning"],
        },
        Project {
            title: "AI Crisis Tweet Classifier",
            category: "Machine Learning • NLP",
            year: "2024",
            description: "Streamlit app using Linear SVM + TF-IDF to classify tweets during \
                          crisis events as informative or not informative.",
            github: Some("https://github.com/shaownXjony/AI-Crisis-Tweet-Classifier"),
            technologies: &["Python", "Streamlit", "Scikit-learn", "NLP"],
        },
        Project {
            title: "Global CO₂ Dashboard",
            category: "Data Analytics • Visualization",
            year: "2024",
            description: "Interactive dashboard for historical global CO₂ emissions and related \
                          indicators, with dynamic filtering and GDP correlation analysis.",
            github: Some("https://github.com/shaownXjony/global-co2-dashboard"),
            technologies: &["Python", "Plotly", "Dash", "Data Analysis"],
        },
        Project {
            title: "Adult Income ML",
            category: "Machine Learning • Data Science",
            year: "2025",
            description: "Predicts adult income from demographic features. Built for OSTAD \
                          Academy's Data Science and Machine Learning course.",
            github: Some("https://github.com/shaownXjony/adult-income-ml"),
            technologies: &["Python", "Scikit-learn", "Pandas", "ML"],
        },
        Project {
            title: "CS50 Final Project",
            category: "Web Development • Python",
            year: "2025",
            description: "Final project for Harvard's CS50 course, demonstrating Python \
                          programming and software development principles.",
            github: Some("https://github.com/shaownXjony/CS50-final-Project"),
            technologies: &["Python", "CS50", "Web Development"],
        },
    ],
    all_projects_url: "https://github.com/shaownXjony?tab=repositories",
    skills_intro: "A quantitative breakdown of my journey in data science and machine learning engineering.",
    skill_tags: &[
        "Data Analysis",
        "Machine Learning",
        "Computer Vision",
        "NLP Systems",
        "AI Applications",
    ],
    stats: &[
        Stat { value: "3+", label: "Years Learning" },
        Stat { value: "15+", label: "Projects Built" },
        Stat { value: "5+", label: "ML Models" },
    ],
    tech: &[
        "Python",
        "TensorFlow",
        "Keras",
        "OpenCV",
        "Scikit-learn",
        "Pandas",
        "NumPy",
        "JavaScript",
    ],
    credentials: &[
        Credential {
            title: "Machine Learning Specialization",
            detail: Some("DeepLearning.AI & Stanford University"),
            when: "2025",
            kind: CredentialKind::Certification,
        },
        Credential {
            title: "Data Science & Machine Learning with Python",
            detail: Some("Ostad Academy"),
            when: "2025",
            kind: CredentialKind::Certification,
        },
        Credential {
            title: "Generative AI Engineering",
            detail: Some("IBM Professional Certificate"),
            when: "2025",
            kind: CredentialKind::Certification,
        },
        Credential {
            title: "CS50's Introduction to Programming with Python",
            detail: Some("Harvard University"),
            when: "2025",
            kind: CredentialKind::Course,
        },
        Credential {
            title: "Private Tutoring",
            detail: Some("Mathematics & Science"),
            when: "2017–Present",
            kind: CredentialKind::Activity,
        },
        Credential {
            title: "PUB Programming Competition Participant",
            detail: None,
            when: "2018–2022",
            kind: CredentialKind::Activity,
        },
        Credential {
            title: "Volunteer, Pundra University Science Club",
            detail: None,
            when: "2019–2022",
            kind: CredentialKind::Activity,
        },
    ],
    blog: &[
        BlogPost {
            title: "Sajek Tour: 5 Days Mountain Adventure",
            category: "Travel, Adventure",
            date: "Aug 2023",
            link: Some("https://www.facebook.com/jonys4s"),
        },
        BlogPost {
            title: "Building Real-Time Object Detection with YOLOv8",
            category: "Computer Vision, Deep Learning",
            date: "2024",
            link: None,
        },
        BlogPost {
            title: "Crisis Tweet Classification Using Machine Learning",
            category: "Machine Learning, NLP",
            date: "2024",
            link: None,
        },
        BlogPost {
            title: "Visualizing Global CO₂ Emissions with Interactive Dashboards",
            category: "Data Analysis, Visualization",
            date: "2024",
            link: None,
        },
        BlogPost {
            title: "Understanding Explainable AI in Modern ML Systems",
            category: "AI, Machine Learning",
            date: "2025",
            link: None,
        },
        BlogPost {
            title: "From Raw Data to Insights: A Data Science Workflow",
            category: "Data Science, Analysis",
            date: "2024",
            link: None,
        },
        BlogPost {
            title: "Getting Started with TensorFlow and Keras",
            category: "Deep Learning, Tutorial",
            date: "2024",
            link: None,
        },
    ],
    contact: Contact {
        email: "shaownrahman30@gmail.com",
        address: "Bogura, Bangladesh",
        socials: &[
            ("GitHub", "https://github.com/shaownXjony"),
            ("LinkedIn", "https://www.linkedin.com/in/shaownrahman"),
            ("Facebook", "https://www.facebook.com/jonys4s/"),
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_cap_at_three() {
        let (shown, more) = CONTENT.projects[0].chips();
        assert_eq!(shown, &["Python", "YOLOv8", "OpenCV"]);
        assert_eq!(more, 1);

        let (shown, more) = CONTENT.projects[4].chips();
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 0);
    }

    #[test]
    fn credentials_split_by_kind() {
        assert_eq!(CONTENT.certifications().count(), 4);
        assert_eq!(CONTENT.activities().count(), 3);
    }
}
