//! Static page copy for the wizard flow.
//!
//! All interactive parts (choice options, chart, code editors, navigation)
//! are added by `render.rs`; this module only carries the prose.

use crate::routes::PageId;

pub struct PageContent {
    pub title: &'static str,
    pub body: &'static [&'static str],
}

pub fn page_content(page: PageId) -> PageContent {
    match page {
        PageId::Index => PageContent {
            title: "Welcome",
            body: &[
                "You are probably faced with a difficult choice. Choosing a new \
                 education. But this gadget is guaranteed to help you further! It \
                 asks you a number of questions, and as a result of these questions \
                 you get small projects that have to do with different courses \
                 within Saxion.",
                "So: do you want to know whether Applied Computer Science, \
                 Electrical and Electronic Engineering, Software Engineering, \
                 Mechatronics or Industrial Product Design suits you? Start the \
                 gadget now!",
            ],
        },
        PageId::Page1 => PageContent {
            title: "How the gadget works",
            body: &[
                "In order to introduce you to the different courses within Saxion \
                 in a playful and informative way, you will first have to deal with \
                 a small game. You use a marble that you can send in different \
                 directions, depending on the question that is being asked.",
                "After these questions have been answered, the courses that best \
                 match the given answers will be shown. This is followed by the \
                 second phase of this tool.",
            ],
        },
        PageId::Page2 => PageContent {
            title: "The little marble game",
            body: &[
                "To move the marble, different buttons are given below in the \
                 picture, so it can be moved to the left or to the right. Every \
                 question sends the marble towards the course that fits your \
                 answer best.",
                "Thanks for playing the game! We now have an idea of which field \
                 of study you really like.",
            ],
        },
        PageId::Page3 => PageContent {
            title: "A few warm-up questions",
            body: &[
                "Before we show your results, think about what you enjoy most: \
                 tinkering with hardware, writing programs, designing products, or \
                 a bit of everything. There is no wrong answer here.",
                "On the next page you tell the gadget which study programme you \
                 currently have in mind. Your answer decides which results chart \
                 and which small project you will get.",
            ],
        },
        PageId::Page4 => PageContent {
            title: "Which study do you have in mind?",
            body: &[
                "Pick the study programme you are currently leaning towards. Not \
                 sure yet? That is fine too, just say you have no preference.",
            ],
        },
        PageId::Page5 => PageContent {
            title: "Best fit for your education",
            body: &[
                "Based on your answers, this chart shows how well each Saxion \
                 course matches you, as a score from 0 to 100.",
            ],
        },
        PageId::Page6 => PageContent {
            title: "Your small project",
            body: &[
                "You now have a general impression of which training suits you \
                 best. By pressing the next button you start a small simple \
                 project that introduces you further to this training.",
            ],
        },
        PageId::Page7 => PageContent {
            title: "Project: your first C++ program",
            body: &[
                "Applied Computer Science and Electrical Engineering students \
                 write a lot of C++. Your first task is the classic one: make the \
                 computer greet Saxion.",
                "On the next page you find a small editor. Write one statement \
                 that prints the text Hello, Saxion! to the screen, then press \
                 run. Hint: in C++ you print with std::cout.",
            ],
        },
        PageId::Page8 => PageContent {
            title: "C++ exercise",
            body: &[
                "Write a statement that prints Hello, Saxion! and run it.",
            ],
        },
        PageId::Page9 => PageContent {
            title: "How your C++ program works",
            body: &[
                "std::cout is the standard output stream: everything you shift \
                 into it with << appears on the screen. std::endl ends the line, \
                 and the semicolon ends the statement — forget it and the \
                 compiler will complain.",
                "Congratulations, you have written and checked your first piece \
                 of C++. Curious how programmers at Saxion build whole \
                 applications? Keep going.",
            ],
        },
        PageId::Page10 => PageContent {
            title: "Project: a taste of Software Engineering",
            body: &[
                "Software Engineering students often start with Python, a \
                 language made for readable code. The next page has a second \
                 editor: this time, print the same greeting in Python. Hint: \
                 Python 3 prints with print(...).",
            ],
        },
        PageId::Page11 => PageContent {
            title: "Python exercise",
            body: &[
                "Write a statement that prints Hello, Saxion! and run it.",
            ],
        },
        PageId::Page12 => PageContent {
            title: "Mechatronics at Saxion",
            body: &[
                "Mechatronics combines mechanics, electronics and software: \
                 think robot arms, drones and smart production lines. In the \
                 first year you build a line-following robot from scratch.",
            ],
        },
        PageId::Page13 => PageContent {
            title: "Industrial Product Design at Saxion",
            body: &[
                "Industrial Product Design is for makers: from sketch to 3D \
                 print to a product people actually use. Projects run together \
                 with real companies from the region.",
            ],
        },
        PageId::Page14 => PageContent {
            title: "Electrical and Electronic Engineering at Saxion",
            body: &[
                "Electrical and Electronic Engineering is everywhere energy or \
                 information flows: power grids, chips, sensors and embedded \
                 systems. You will solder, measure and program from week one.",
            ],
        },
        PageId::Page15 => PageContent {
            title: "Applied Computer Science at Saxion",
            body: &[
                "Applied Computer Science is hands-on IT: networks, security, \
                 data and software that solves concrete problems for concrete \
                 clients. Smart solutions for a smart world.",
            ],
        },
        PageId::Page16 => PageContent {
            title: "Comparing the programmes",
            body: &[
                "All five programmes share a first-year core of mathematics and \
                 programming, so switching early is easy. The difference is the \
                 balance: more hardware, more software, or more design.",
            ],
        },
        PageId::Page17 => PageContent {
            title: "Visit us on an open day",
            body: &[
                "The best way to choose is to come and look. Saxion organizes \
                 open days in Enschede, Deventer and Apeldoorn several times a \
                 year; you can talk to students and teachers of every programme.",
            ],
        },
        PageId::Page18 => PageContent {
            title: "How to enroll",
            body: &[
                "Enrollment goes through Studielink before the first of May. \
                 After enrolling you are invited to a study-choice check, so you \
                 can be sure the programme fits before the year starts.",
            ],
        },
        PageId::Page19 => PageContent {
            title: "Frequently asked questions",
            body: &[
                "Do I need programming experience? No — every programme starts \
                 from zero. Is the programme in English? Yes, all five are \
                 offered in English. Can I study part-time? Several programmes \
                 offer a part-time track.",
            ],
        },
        PageId::Page20 => PageContent {
            title: "Get ready for a smart world!",
            body: &[
                "That is the end of the gadget. Hopefully you now have a better \
                 feeling for which Saxion programme fits you. Share the result \
                 with your parents, your mentor, or run the gadget again with a \
                 different choice.",
            ],
        },
    }
}
